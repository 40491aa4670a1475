//--------------------------------------------------------------------
// path.rs
//--------------------------------------------------------------------
// Provides the Path data structure, a contiguous chain of curves
//--------------------------------------------------------------------

use crate::curve::Curve;
use crate::error::GeometryError;
use crate::geometry::Point;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    curves: Vec<Curve>,
}

pub type PathList = Vec<Path>;

impl Path {
    pub fn new() -> Path {
        Path { curves: Vec::new() }
    }

    /// Appends a curve to the path. The initial point of the input curve
    /// must match the final point of the last curve in the path; on success
    /// the appended curve is snapped to it exactly.
    pub fn append(&mut self, curve: Curve) -> Result<(), GeometryError> {
        let curve = match self.curves.last() {
            Some(last) => {
                let end = last.final_point();
                if curve.initial_point() != end {
                    return Err(GeometryError::NoncontiguousCurves {
                        path_end: end,
                        curve_start: curve.initial_point(),
                    });
                }
                curve.with_initial_point(end)
            }
            None => curve,
        };

        self.curves.push(curve);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_closed(&self) -> bool {
        self.final_point() == self.initial_point()
    }

    // Joins the last point to the first with a line segment
    pub fn close(&mut self) {
        if !self.is_closed() {
            let lseg = Curve::line(self.final_point(), self.initial_point());
            self.curves.push(lseg);
        }
    }

    pub fn initial_point(&self) -> Point {
        self.curves.first().map_or(Point::zero(), |c| c.initial_point())
    }

    pub fn final_point(&self) -> Point {
        self.curves.last().map_or(Point::zero(), |c| c.final_point())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Curve> {
        self.curves.iter()
    }

    /// Convenience facade over the boolean engine.
    pub fn compute_union(&self, other: &Path) -> Result<PathList, GeometryError> {
        crate::boolean::compute_union(&vec![self.clone()], &vec![other.clone()])
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Curve;

    fn index(&self, idx: usize) -> &Curve {
        &self.curves[idx]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Curve;
    type IntoIter = std::slice::Iter<'a, Curve>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for curve in &self.curves {
            writeln!(f, "{}", curve)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::{CubicBezier, LineSegment};

    #[test]
    fn point_equality() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-1.0, 2.0);
        let c = Point::zero();
        let d = Point::new(-1.0, 2.0);
        let e = Point::new(0.0, 0.0);

        assert!(a != b);
        assert!(b != c);
        assert!(b == d);
        assert!(c == e);
    }

    #[test]
    fn point_equality_tolerance() {
        // Default FLOAT_PRECISION is 0.001
        assert!(Point::new(1.0, 2.0) == Point::new(1.0009, 2.0));
        assert!(Point::new(1.0, 2.0) != Point::new(1.0011, 2.0));
    }

    #[test]
    fn lseg_equality() {
        let l1 = LineSegment { a: Point::new(1.0, 2.0), b: Point::new(3.0, 4.0) };
        let l2 = LineSegment { a: Point::new(1.0011, 2.0), b: Point::new(3.0, 4.0) };
        let l3 = l2;
        let l4 = LineSegment { a: Point::new(1.0009, 2.0), b: Point::new(3.0, 4.0) };

        assert!(l1 != l2);
        assert!(l1 == l4);
        assert!(l2 == l3);
    }

    #[test]
    fn append_contiguous() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))).unwrap();
        path.append(Curve::line(Point::new(1.0, 0.0), Point::new(1.0, 1.0))).unwrap();

        assert_eq!(path.len(), 2);
        assert!(!path.is_closed());
    }

    #[test]
    fn append_snaps_exactly() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))).unwrap();

        // Within tolerance but not exact; the appended curve must be snapped
        path.append(Curve::line(Point::new(1.0004, 0.0), Point::new(1.0, 1.0))).unwrap();

        let end = path[0].final_point();
        let start = path[1].initial_point();
        assert_eq!(end.x.to_bits(), start.x.to_bits());
        assert_eq!(end.y.to_bits(), start.y.to_bits());
    }

    #[test]
    fn append_noncontiguous() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))).unwrap();

        let err = path.append(Curve::line(Point::new(2.0, 0.0), Point::new(3.0, 0.0)));
        match err {
            Err(GeometryError::NoncontiguousCurves { path_end, curve_start }) => {
                assert_eq!(path_end, Point::new(1.0, 0.0));
                assert_eq!(curve_start, Point::new(2.0, 0.0));
            }
            other => panic!("expected NoncontiguousCurves, got {:?}", other),
        }
    }

    #[test]
    fn close_appends_missing_edge() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))).unwrap();
        path.append(Curve::line(Point::new(1.0, 0.0), Point::new(1.0, 1.0))).unwrap();

        path.close();
        assert!(path.is_closed());
        assert_eq!(path.len(), 3);
        assert_eq!(path[2], Curve::line(Point::new(1.0, 1.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn close_is_idempotent() {
        let mut path = Path::new();
        path.append(Curve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))).unwrap();
        path.append(Curve::line(Point::new(1.0, 0.0), Point::new(1.0, 1.0))).unwrap();

        path.close();
        path.close();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn copy_is_deep() {
        let mut path = Path::new();
        path.append(Curve::cubic_bezier(
            Point::new(0.0, 0.0), Point::new(1.0, 2.0),
            Point::new(2.0, 2.0), Point::new(3.0, 0.0))).unwrap();

        let copy = path.clone();
        assert_eq!(path[0], copy[0]);

        match (&path[0], &copy[0]) {
            (Curve::CubicBezier(b1), Curve::CubicBezier(b2)) => {
                assert_eq!(CubicBezier { ..*b1 }, CubicBezier { ..*b2 });
            }
            _ => panic!("expected cubic Béziers"),
        }
    }
}
