//--------------------------------------------------------------------
// angle_key.rs
//--------------------------------------------------------------------
// A structure that contains the beginning angle of a curve, its
// derivative and double derivative, used as a key to the DCEL
//--------------------------------------------------------------------

use crate::ordered_float::OrderedFloat;

use crate::geometry::*;

#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct AngleKey { t: OrderedFloat<Coord>, dt: OrderedFloat<Coord>, ddt: OrderedFloat<Coord> }

impl AngleKey {
    pub fn new(t: Coord, dt: Coord, ddt: Coord) -> AngleKey {
        let t = t.into();
        let dt = dt.into();
        let ddt = ddt.into();
        AngleKey { t, dt, ddt }
    }
}

// Limit key for a cubic whose leading control segment degenerates: fall
// back to the derivative quadratic, and to its derivative in turn
pub(super) fn quadratic_angle_key(a: Point, b: Point, c: Point) -> AngleKey {
    let dv1 = b - a;
    let dv2 = c - b;

    if dv1.roughly_zero() {
        let da = 2.0 * (b - a);
        let db = 2.0 * (c - b);
        AngleKey::new(da.angle_facing(db), 0.0, 0.0)
    } else {
        let dt = dv1.cross(dv2 - dv1) / dv1.length_sq();
        let ddt = -2.0 * dv1.dot(dv2 - dv1) * dt / dv1.length_sq();
        AngleKey::new(dv1.angle(), dt, ddt)
    }
}

impl std::fmt::Debug for AngleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.t, self.dt, self.ddt)
    }
}
