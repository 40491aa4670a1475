//--------------------------------------------------------------------
// boolean.rs
//--------------------------------------------------------------------
// The union engine: splits both inputs' boundary curves at their
// mutual intersections, carves the plane into faces with a DCEL and
// keeps the faces covered by either input
//--------------------------------------------------------------------

pub mod approx_beziers;
mod cluster;
mod dcel;

use crate::curve::*;
use crate::error::GeometryError;
use crate::geometry::*;
use crate::path::PathList;
use crate::polygon::*;

// A filled face of the overlay: its boundary contours, interior on the left
pub(crate) struct FillFace {
    pub contours: Vec<Vec<Curve>>,
}

/// Computes the union of the regions drawn by two path lists.
#[cfg(not(feature = "approx-beziers"))]
pub fn compute_union(paths1: &PathList, paths2: &PathList) -> Result<PathList, GeometryError> {
    union_paths(paths1, paths2)
}

/// Computes the union of the regions drawn by two path lists, with cubics
/// tessellated into polylines first.
#[cfg(feature = "approx-beziers")]
pub fn compute_union(paths1: &PathList, paths2: &PathList) -> Result<PathList, GeometryError> {
    approx_beziers::compute_union(paths1, paths2)
}

pub(crate) fn union_paths(paths1: &PathList, paths2: &PathList) -> Result<PathList, GeometryError> {
    let polys1 = to_poly_list(paths1)?;
    let polys2 = to_poly_list(paths2)?;
    let merged = union_poly_lists(&polys1, &polys2)?;

    to_path_list(&merged)
}

/// Computes the union of two polygon sets. The result's polygons are
/// pairwise interior-disjoint, outers counter-clockwise, holes clockwise.
pub fn union_poly_lists(polys1: &PolyList, polys2: &PolyList) -> Result<PolyList, GeometryError> {
    let curves1 = boundary_curves(polys1);
    let curves2 = boundary_curves(polys2);

    if curves1.is_empty() {
        return Ok(polys2.clone());
    }
    if curves2.is_empty() {
        return Ok(polys1.clone());
    }

    let faces = overlay(curves1, curves2)?;
    faces_to_poly_list(faces)
}

fn boundary_curves(polys: &PolyList) -> Vec<Curve> {
    let mut curves = Vec::new();

    for poly in polys {
        for boundary in std::iter::once(poly.outer_boundary()).chain(poly.holes().iter()) {
            for mono in boundary.curves() {
                curves.push(mono.to_bezier().to_curve());
            }
        }
    }

    curves
}

fn curve_is_finite(curve: &Curve) -> bool {
    match curve {
        Curve::Line(l) => l.a.is_finite() && l.b.is_finite(),
        Curve::CubicBezier(c) => {
            c.a.is_finite() && c.b.is_finite() && c.c.is_finite() && c.d.is_finite()
        }
    }
}

fn is_curve_degenerate(curve: &Curve) -> bool {
    match curve {
        Curve::Line(l) => l.a.roughly_equals(l.b),
        Curve::CubicBezier(c) => {
            c.a.roughly_equals(c.b) && c.b.roughly_equals(c.c) && c.c.roughly_equals(c.d)
        }
    }
}

// Curves with index below `first_set_len` belong to input set 0, the rest
// to set 1
fn overlay(curves1: Vec<Curve>, curves2: Vec<Curve>) -> Result<Vec<FillFace>, GeometryError> {
    let first_set_len = curves1.len();
    let mut curves = curves1;
    curves.extend(curves2);

    for curve in &curves {
        if !curve_is_finite(curve) {
            return Err(GeometryError::Kernel("non-finite boundary coordinates".to_string()));
        }
    }

    // Cache the curves' critical points
    let critical_points: Vec<_> = curves.iter().map(|c| c.critical_points()).collect();

    // First, get all intersection points between the curves
    let mut intersections = vec![cluster::ParamMap::new(); curves.len()];
    for i1 in 0..curves.len() - 1 {
        for i2 in i1 + 1..curves.len() {
            let ints = intersection(&curves[i1], &curves[i2],
                &critical_points[i1], &critical_points[i2]);

            for int in ints {
                if int.0.is_nan() || int.1.is_nan() {
                    return Err(GeometryError::Kernel(
                        "intersection solver produced NaN".to_string()));
                }

                if inside01(int.0) && inside01(int.1) {
                    intersections[i1].insert(int.0.into(), curves[i1].at(int.0));
                    intersections[i2].insert(int.1.into(), curves[i2].at(int.1));
                }
            }
        }
    }

    for i in 0..curves.len() {
        intersections[i].insert(0.0.into(), curves[i].at(0.0));
        intersections[i].insert(1.0.into(), curves[i].at(1.0));
    }

    // Cluster the intersection points and insert the split curves
    let (clusters, num_pts) = cluster::derive_clusters(&intersections);

    let mut dcel = dcel::Dcel::new(num_pts);
    for (i, (curve, cluster)) in curves.into_iter().zip(clusters.into_iter()).enumerate() {
        let set = if i < first_set_len { 0 } else { 1 };
        let cluster: Vec<_> = cluster.into_iter().collect();

        if cluster.len() == 2 {
            if !is_curve_degenerate(&curve) {
                dcel.add_curve(cluster[0].1, cluster[1].1, curve, set);
            }
        } else {
            for k in 1..cluster.len() {
                // Skip degenerate slivers
                let sub = curve.subcurve(*cluster[k - 1].0, *cluster[k].0);
                if !is_curve_degenerate(&sub) {
                    dcel.add_curve(cluster[k - 1].1, cluster[k].1, sub, set);
                }
            }
        }
    }

    dcel.remove_wedges();
    dcel.assign_face_fill_numbers();
    dcel.simplify_faces();

    Ok(dcel.fill_faces())
}

fn faces_to_poly_list(faces: Vec<FillFace>) -> Result<PolyList, GeometryError> {
    let mut polys = PolyList::new();

    for face in faces {
        let mut outer: Option<BezierPolygon> = None;
        let mut holes = Vec::new();

        for contour in &face.contours {
            let mut mono_curves = Vec::new();
            for curve in contour {
                mono_curves.extend(make_x_monotone(RatBezier::from_curve(curve)?)?);
            }

            let boundary = BezierPolygon::new(mono_curves);

            if boundary.orientation() == Orientation::CounterClockwise && outer.is_none() {
                outer = Some(boundary);
            } else {
                holes.push(boundary);
            }
        }

        match outer {
            Some(outer) => polys.push(PolygonWithHoles::new(outer, holes)),
            None => log::warn!("union face without an outer boundary; discarding"),
        }
    }

    Ok(polys)
}
