//--------------------------------------------------------------------
// cubic_bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::angle_key::quadratic_angle_key;
use super::*;
use crate::geometry::*;
use crate::vec_utils::*;

#[derive(Copy, Clone, Display)]
#[display(fmt = "CubicBezier[{}, {}, {}, {}]", a, b, c, d)]
pub struct CubicBezier { pub a: Point, pub b: Point, pub c: Point, pub d: Point }

impl CubicBezier {
    pub fn at(&self, t: Coord) -> Point {
        let ct = 1.0 - t;
        ct * ct * ct * self.a + 3.0 * ct * ct * t * self.b
            + 3.0 * ct * t * t * self.c + t * t * t * self.d
    }

    pub fn initial_point(&self) -> Point { self.a }

    pub fn final_point(&self) -> Point { self.d }

    // Control points of the derivative, a quadratic Bézier
    fn derivative_points(&self) -> (Point, Point, Point) {
        (3.0 * (self.b - self.a), 3.0 * (self.c - self.b), 3.0 * (self.d - self.c))
    }

    pub fn subcurve(&self, l: Coord, r: Coord) -> CubicBezier {
        // The endpoints
        let a = self.at(l);
        let d = self.at(r);

        // The control points, from the derivative at the endpoints
        let d1 = self.derivative_at(l) * (r - l);
        let d2 = self.derivative_at(r) * (r - l);

        let b = d1 / 3.0 + a;
        let c = d - d2 / 3.0;

        CubicBezier { a, b, c, d }
    }

    fn derivative_at(&self, t: Coord) -> Point {
        let (da, db, dc) = self.derivative_points();
        let ct = 1.0 - t;
        ct * ct * da + 2.0 * ct * t * db + t * t * dc
    }

    pub fn reverse(&self) -> CubicBezier {
        CubicBezier { a: self.d, b: self.c, c: self.b, d: self.a }
    }

    pub fn winding(&self) -> Coord {
        (6.0 * self.a.cross(self.b) + 3.0 * self.a.cross(self.c) + self.a.cross(self.d) +
            3.0 * self.b.cross(self.c) + 3.0 * self.b.cross(self.d) + 6.0 * self.c.cross(self.d)) / 10.0
    }

    pub fn angle_key(&self) -> AngleKey {
        let dv1 = self.b - self.a;
        let dv2 = self.c - self.b;
        let dv3 = self.d - self.c;

        // If dv1 is zero, the following angles will fall apart, so we take the limit
        if dv1.roughly_zero() {
            let (da, db, dc) = self.derivative_points();
            quadratic_angle_key(da, db, dc)
        } else {
            let dt = 2.0 * dv1.cross(dv2 - dv1) / dv1.length_sq();
            let ddt = (2.0 * dv1.cross(dv3 - 2.0 * dv2 + dv1) - 8.0 * dv1.dot(dv2 - dv1) * dt) / dv1.length_sq();
            AngleKey::new(dv1.angle(), dt, ddt)
        }
    }

    pub fn intersection_x(&self, x: Coord) -> roots::Roots<Coord> {
        roots::find_roots_cubic(-self.a.x + 3.0 * self.b.x - 3.0 * self.c.x + self.d.x,
            3.0 * (self.a.x - 2.0 * self.b.x + self.c.x), 3.0 * (self.b.x - self.a.x), self.a.x - x)
    }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        roots::find_roots_cubic(-self.a.y + 3.0 * self.b.y - 3.0 * self.c.y + self.d.y,
            3.0 * (self.a.y - 2.0 * self.b.y + self.c.y), 3.0 * (self.b.y - self.a.y), self.a.y - y)
    }

    pub fn intersection_seg(&self, v1: Point, v2: Point) -> roots::Roots<Coord> {
        let dv = v1 - v2;
        roots::find_roots_cubic(dv.cross(-self.a + 3.0 * self.b - 3.0 * self.c + self.d),
            3.0 * dv.cross(self.a - 2.0 * self.b + self.c),
            3.0 * dv.cross(self.b - self.a), dv.cross(self.a - v1))
    }

    pub fn critical_points(&self) -> CriticalPoints {
        let (da, db, dc) = self.derivative_points();
        let tx = roots::find_roots_quadratic(da.x - 2.0 * db.x + dc.x, 2.0 * (db.x - da.x), da.x);
        let ty = roots::find_roots_quadratic(da.y - 2.0 * db.y + dc.y, 2.0 * (db.y - da.y), da.y);

        let mut v = CriticalPoints::new();
        v.push(0.0);
        v.extend(tx.as_ref().iter().copied());
        v.extend(ty.as_ref().iter().copied());
        v.push(1.0);
        v.retain(|&mut t| inside01(t));
        v.sort_unstable_by(|a: &Coord, b: &Coord| a.partial_cmp(b).unwrap());
        arrayvec_dedup(&mut v);
        v
    }
}

// Equality under the Point tolerance
impl PartialEq for CubicBezier {
    fn eq(&self, other: &CubicBezier) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c && self.d == other.d
    }
}

impl std::fmt::Debug for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
