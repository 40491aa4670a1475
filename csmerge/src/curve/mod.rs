//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the proxy enumeration Curve, which acts as a dispatcher
// between the two curve variants a charstring can draw
//--------------------------------------------------------------------

use crate::derive_more::*;

mod angle_key;
mod cubic_bezier;
mod intersection;
mod line;

pub use angle_key::AngleKey;
pub use cubic_bezier::CubicBezier;
pub use intersection::*;
pub use line::LineSegment;

use crate::arrayvec::ArrayVec;
use crate::geometry::*;

#[derive(Display, Clone, PartialEq)]
pub enum Curve {
    Line(LineSegment),
    CubicBezier(CubicBezier),
}

// Use a simplifier macro to implement the "normal" functions
macro_rules! forward_to_curves {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty );*) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Curve::Line(l) => l.$i($($arg,)*),
                    Curve::CubicBezier(c) => c.$i($($arg,)*),
                }
            }
        )*
    }
}

pub const MAX_CRITICAL_POINTS: usize = 6;

pub type CriticalPoints = ArrayVec<[Coord; MAX_CRITICAL_POINTS]>;

impl Curve {
    // Forward the implementations that have similar signatures
    forward_to_curves! {
        at(t: Coord) -> Point;
        initial_point() -> Point;
        final_point() -> Point;
        winding() -> Coord;
        angle_key() -> AngleKey;

        intersection_x(x: Coord) -> roots::Roots<Coord>;
        intersection_y(y: Coord) -> roots::Roots<Coord>;
        intersection_seg(v1: Point, v2: Point) -> roots::Roots<Coord>;

        critical_points() -> CriticalPoints
    }

    pub fn subcurve(&self, l: Coord, r: Coord) -> Curve {
        match self {
            Curve::Line(ln) => Curve::Line(ln.subcurve(l, r)),
            Curve::CubicBezier(c) => Curve::CubicBezier(c.subcurve(l, r)),
        }
    }

    pub fn reverse(&self) -> Curve {
        match self {
            Curve::Line(l) => Curve::Line(l.reverse()),
            Curve::CubicBezier(c) => Curve::CubicBezier(c.reverse()),
        }
    }

    /// Returns the same curve with its first control point replaced.
    pub fn with_initial_point(&self, point: Point) -> Curve {
        match self {
            Curve::Line(l) => Curve::Line(LineSegment { a: point, ..*l }),
            Curve::CubicBezier(c) => Curve::CubicBezier(CubicBezier { a: point, ..*c }),
        }
    }

    // Create curves of specific types
    pub fn line(a: Point, b: Point) -> Curve {
        Curve::Line(LineSegment { a, b })
    }

    pub fn cubic_bezier(a: Point, b: Point, c: Point, d: Point) -> Curve {
        Curve::CubicBezier(CubicBezier { a, b, c, d })
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
