//--------------------------------------------------------------------
// cluster.rs
//--------------------------------------------------------------------
// Groups near-coincident intersection points into shared arrangement
// vertices, using a union-find over the Point tolerance
//--------------------------------------------------------------------

use std::collections::{BTreeMap, HashMap};
use std::mem;

use crate::ordered_float::OrderedFloat;

use crate::geometry::{Coord, Point};

pub(super) type ParamMap = BTreeMap<OrderedFloat<Coord>, Point>;
pub(super) type ClusterMap = BTreeMap<OrderedFloat<Coord>, usize>;

/// Maps each curve's intersection parameters to vertex ids, merging points
/// that compare equal under the tolerance. Returns the per-curve maps and
/// the number of distinct vertices.
pub(super) fn derive_clusters(intersections: &[ParamMap]) -> (Vec<ClusterMap>, usize) {
    // First, gather all points and create the union find
    let all_points: Vec<&Point> = intersections.iter().flat_map(|map| map.values()).collect();
    let mut uf = UnionFind::new(all_points.len());

    for i in 0..all_points.len() {
        for j in i + 1..all_points.len() {
            if all_points[i] == all_points[j] {
                uf.union(i, j);
            }
        }
    }

    // "Flatten" the cluster parents
    let mut flat = HashMap::new();
    let mut max = 0;
    for i in 0..all_points.len() {
        let root = uf.find(i);
        if !flat.contains_key(&root) {
            flat.insert(root, max);
            max += 1;
        }
    }

    // Finally, attribute the (flattened) clusters to the original curves
    let mut clusters = vec![ClusterMap::new(); intersections.len()];
    let mut k = 0;

    for i in 0..intersections.len() {
        for (t, _) in &intersections[i] {
            clusters[i].insert(*t, flat[&uf.find(k)]);
            k += 1;
        }
    }

    (clusters, max)
}

struct UnionFind {
    parents: Box<[usize]>,
    sizes: Box<[usize]>,
}

impl UnionFind {
    fn new(cnt: usize) -> UnionFind {
        let parents = (0..cnt).collect::<Vec<_>>().into_boxed_slice();
        let sizes = vec![1; cnt].into_boxed_slice();
        UnionFind { parents, sizes }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parents[i] == i {
            i
        } else {
            self.parents[i] = self.find(self.parents[i]);
            self.parents[i]
        }
    }

    fn union(&mut self, i: usize, j: usize) {
        let mut i = self.find(i);
        let mut j = self.find(j);

        if i != j {
            if self.sizes[i] < self.sizes[j] {
                mem::swap(&mut i, &mut j);
            }
            self.parents[j] = i;
            self.sizes[i] += self.sizes[j];
        }
    }
}
