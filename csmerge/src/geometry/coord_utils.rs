//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate type
//--------------------------------------------------------------------

use super::*;

pub const EPSILON: Coord = 1.0 / 32768.0;
pub const EPSILON2: Coord = EPSILON * EPSILON;

// Fixed tolerance used by the intersection and overlay internals. Point
// equality uses the configurable FLOAT_PRECISION instead.
// trait used only for implementation
pub trait Geometry
where
    Self: Sized,
{
    fn roughly_zero(self) -> bool;
    fn roughly_zero_squared(self) -> bool;
    fn roughly_equals(self, other: Self) -> bool;
}

impl Geometry for Coord {
    fn roughly_zero(self) -> bool {
        self > -EPSILON && self < EPSILON
    }

    fn roughly_zero_squared(self) -> bool {
        self > -EPSILON2 && self < EPSILON2
    }

    fn roughly_equals(self, other: Self) -> bool {
        (self - other).roughly_zero()
    }
}

pub fn inside01(t: Coord) -> bool {
    t >= 0.0 && t <= 1.0
}
