//--------------------------------------------------------------------
// point.rs
//--------------------------------------------------------------------
// Provides the two-dimensional point class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;
use crate::config::float_precision;

// Point doubles as a displacement vector, so the usual vector algebra
// lives here as well
#[derive(Copy, Clone, Add, Sub, Mul, Div, AddAssign, SubAssign, Neg,
    MulAssign, DivAssign, From, Into, Display, Constructor)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point { pub x: Coord, pub y: Coord }

impl Point {
    pub fn zero() -> Point { Point { x: 0.0, y: 0.0 } }

    pub fn dot(&self, other: Point) -> Coord { self.x * other.x + self.y * other.y }
    pub fn cross(&self, other: Point) -> Coord { self.x * other.y - self.y * other.x }

    pub fn length_sq(&self) -> Coord { self.dot(*self) }
    pub fn length(&self) -> Coord { self.length_sq().sqrt() }
    pub fn normalized(&self) -> Point { *self / self.length() }

    pub fn angle(&self) -> Coord { self.y.atan2(self.x) }
    pub fn angle_facing(&self, other: Point) -> Coord { (other - *self).angle() }

    pub fn roughly_zero(&self) -> bool { self.length_sq().roughly_zero_squared() }
    pub fn roughly_equals(&self, other: Point) -> bool { (*self - other).length_sq().roughly_zero_squared() }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

// Equality is component-wise, under the configurable tolerance
impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        let eps = float_precision();
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

// Implement scalar * mul as required
impl core::ops::Mul<Point> for Coord {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point { Point::new(self * rhs.x, self * rhs.y) }
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
