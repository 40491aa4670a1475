//--------------------------------------------------------------------
// rational.rs
//--------------------------------------------------------------------
// Exact-rational control points and de Casteljau subdivision, the
// arithmetic kernel underneath the polygon bridge
//--------------------------------------------------------------------

use crate::num_rational::BigRational;
use crate::num_traits::ToPrimitive;

use crate::curve::Curve;
use crate::error::GeometryError;
use crate::geometry::{CoordM, Point};

pub type Rational = BigRational;

#[derive(Clone, Debug, PartialEq)]
pub struct RatPoint {
    pub x: Rational,
    pub y: Rational,
}

impl RatPoint {
    /// Converts a double-precision point into exact rational coordinates.
    /// Every finite double is a rational, so this only fails on non-finite
    /// input.
    pub fn from_point(pt: Point) -> Result<RatPoint, GeometryError> {
        match (Rational::from_float(pt.x), Rational::from_float(pt.y)) {
            (Some(x), Some(y)) => Ok(RatPoint { x, y }),
            _ => Err(GeometryError::Kernel(format!(
                "cannot represent {} as rational coordinates", pt))),
        }
    }

    pub fn to_point(&self) -> Point {
        Point::new(
            self.x.to_f64().unwrap_or(CoordM::NAN),
            self.y.to_f64().unwrap_or(CoordM::NAN),
        )
    }

    pub fn lerp(a: &RatPoint, b: &RatPoint, t: &Rational) -> RatPoint {
        RatPoint {
            x: &a.x + (&b.x - &a.x) * t,
            y: &a.y + (&b.y - &a.y) * t,
        }
    }
}

/// A Bézier curve over rational control points; degree 1 for line
/// segments, degree 3 for cubics.
#[derive(Clone, Debug, PartialEq)]
pub struct RatBezier {
    ctrl: Vec<RatPoint>,
}

impl RatBezier {
    pub fn new(ctrl: Vec<RatPoint>) -> RatBezier {
        debug_assert!(ctrl.len() == 2 || ctrl.len() == 4);
        RatBezier { ctrl }
    }

    pub fn from_curve(curve: &Curve) -> Result<RatBezier, GeometryError> {
        let ctrl = match curve {
            Curve::Line(lseg) => vec![
                RatPoint::from_point(lseg.a)?,
                RatPoint::from_point(lseg.b)?,
            ],
            Curve::CubicBezier(bezier) => vec![
                RatPoint::from_point(bezier.a)?,
                RatPoint::from_point(bezier.b)?,
                RatPoint::from_point(bezier.c)?,
                RatPoint::from_point(bezier.d)?,
            ],
        };

        Ok(RatBezier::new(ctrl))
    }

    pub fn to_curve(&self) -> Curve {
        if self.ctrl.len() == 2 {
            Curve::line(self.ctrl[0].to_point(), self.ctrl[1].to_point())
        } else {
            Curve::cubic_bezier(
                self.ctrl[0].to_point(),
                self.ctrl[1].to_point(),
                self.ctrl[2].to_point(),
                self.ctrl[3].to_point(),
            )
        }
    }

    pub fn is_linear(&self) -> bool {
        self.ctrl.len() == 2
    }

    pub fn num_control_points(&self) -> usize {
        self.ctrl.len()
    }

    pub fn control_point(&self, idx: usize) -> &RatPoint {
        &self.ctrl[idx]
    }

    pub fn set_control_point(&mut self, idx: usize, pt: RatPoint) {
        self.ctrl[idx] = pt;
    }

    /// Splits the curve at `t`, returning the two halves. Exact: no
    /// rounding happens at any step.
    pub fn split(&self, t: &Rational) -> (RatBezier, RatBezier) {
        let (left, right) = de_casteljau(&self.ctrl, t);
        (RatBezier { ctrl: left }, RatBezier { ctrl: right })
    }
}

pub fn de_casteljau(points: &[RatPoint], t: &Rational) -> (Vec<RatPoint>, Vec<RatPoint>) {
    let mut layer = points.to_vec();
    let mut left = vec![layer[0].clone()];
    let mut right = vec![layer[layer.len() - 1].clone()];

    while layer.len() > 1 {
        let next: Vec<RatPoint> = layer
            .windows(2)
            .map(|w| RatPoint::lerp(&w[0], &w[1], t))
            .collect();

        left.push(next[0].clone());
        right.push(next[next.len() - 1].clone());
        layer = next;
    }

    right.reverse();
    (left, right)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use crate::num_traits::One;

    fn rat(n: i64, d: i64) -> Rational {
        use crate::num_bigint::BigInt;
        Rational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn from_point_is_exact() {
        let pt = RatPoint::from_point(Point::new(0.5, -3.25)).unwrap();
        assert_eq!(pt.x, rat(1, 2));
        assert_eq!(pt.y, rat(-13, 4));
    }

    #[test]
    fn from_point_rejects_nan() {
        assert!(RatPoint::from_point(Point::new(std::f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn split_at_half() {
        let curve = RatBezier::new(vec![
            RatPoint::from_point(Point::new(0.0, 0.0)).unwrap(),
            RatPoint::from_point(Point::new(0.0, 1.0)).unwrap(),
            RatPoint::from_point(Point::new(1.0, 1.0)).unwrap(),
            RatPoint::from_point(Point::new(1.0, 0.0)).unwrap(),
        ]);

        let (left, right) = curve.split(&rat(1, 2));

        assert_eq!(left.num_control_points(), 4);
        assert_eq!(right.num_control_points(), 4);

        // The halves share the midpoint, which is exactly (1/2, 3/4)
        assert_eq!(left.control_point(3), right.control_point(0));
        assert_eq!(left.control_point(3).x, rat(1, 2));
        assert_eq!(left.control_point(3).y, rat(3, 4));

        // Endpoints survive untouched
        assert!(left.control_point(0).x == rat(0, 1));
        assert!(right.control_point(3).x.is_one());
    }

    #[test]
    fn split_line_segment() {
        let curve = RatBezier::new(vec![
            RatPoint::from_point(Point::new(0.0, 0.0)).unwrap(),
            RatPoint::from_point(Point::new(4.0, 2.0)).unwrap(),
        ]);

        let (left, right) = curve.split(&rat(1, 4));
        assert_eq!(left.control_point(1).x, rat(1, 1));
        assert_eq!(left.control_point(1).y, rat(1, 2));
        assert_eq!(right.control_point(0), left.control_point(1));
    }
}
