//--------------------------------------------------------------------
// vec_utils.rs
//--------------------------------------------------------------------
// Utility functions for vectors
//--------------------------------------------------------------------

use arrayvec::*;

pub trait RemoveIndices<T> {
    fn remove_indices(&mut self, indices: Vec<usize>);
}

impl<T: Copy> RemoveIndices<T> for Vec<T> {
    fn remove_indices(&mut self, indices: Vec<usize>) {
        if indices.is_empty() { return; }

        let mut indices = indices;
        let len = self.len();

        indices.sort();
        indices.dedup();

        let mut ik = indices[0];
        let mut k = 1;

        for i in ik+1..len {
            if k < indices.len() && i == indices[k] { k += 1; }
            else {
                self[ik] = self[i];
                ik += 1;
            }
        }

        self.truncate(len - k);
    }
}

pub fn arrayvec_dedup_by<A: Array>(v: &mut ArrayVec<A>, f: impl Fn(&A::Item, &A::Item) -> bool)
    where A::Item: Copy + PartialEq {
    if v.len() < 2 { return; }
    let mut j = 0;
    for i in 0..v.len()-1 {
        if !f(&v[i], &v[i+1]) {
            v[j] = v[i];
            j += 1;
        }
    }
    v[j] = v[v.len()-1];
    v.truncate(j+1);
}

pub fn arrayvec_dedup<A: Array>(v: &mut ArrayVec<A>)
    where A::Item: Copy + PartialEq {
    arrayvec_dedup_by(v, |&a, &b| a == b);
}
