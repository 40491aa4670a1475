//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Represents a line segment
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;
use crate::geometry::*;

#[derive(Copy, Clone, Display)]
#[display(fmt = "LineSegment[{}, {}]", a, b)]
pub struct LineSegment { pub a: Point, pub b: Point }

impl LineSegment {
    pub fn at(&self, t: Coord) -> Point { (1.0 - t) * self.a + t * self.b }

    pub fn initial_point(&self) -> Point { self.a }

    pub fn final_point(&self) -> Point { self.b }

    pub fn subcurve(&self, l: Coord, r: Coord) -> LineSegment {
        LineSegment { a: self.at(l), b: self.at(r) }
    }

    pub fn reverse(&self) -> LineSegment { LineSegment { a: self.b, b: self.a } }

    pub fn winding(&self) -> Coord { self.a.cross(self.b) }

    pub fn angle_key(&self) -> AngleKey { AngleKey::new(self.a.angle_facing(self.b), 0.0, 0.0) }

    pub fn intersection_x(&self, x: Coord) -> roots::Roots<Coord> {
        roots::find_roots_linear(self.b.x - self.a.x, self.a.x - x)
    }

    pub fn intersection_y(&self, y: Coord) -> roots::Roots<Coord> {
        roots::find_roots_linear(self.b.y - self.a.y, self.a.y - y)
    }

    pub fn intersection_seg(&self, v1: Point, v2: Point) -> roots::Roots<Coord> {
        let dv = v2 - v1;
        roots::find_roots_linear(dv.cross(self.b - self.a), dv.cross(self.a - v1))
    }

    pub fn critical_points(&self) -> CriticalPoints {
        [0.0, 1.0].iter().copied().collect()
    }
}

// Equality under the Point tolerance
impl PartialEq for LineSegment {
    fn eq(&self, other: &LineSegment) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl std::fmt::Debug for LineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
