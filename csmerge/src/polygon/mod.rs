//--------------------------------------------------------------------
// polygon.rs
//--------------------------------------------------------------------
// The bridge between path lists and polygons-with-holes bounded by
// x-monotone Bézier sections over rational control points
//--------------------------------------------------------------------

use crate::derive_more::*;

mod rational;

pub use rational::*;

use crate::num_traits::{One, ToPrimitive, Zero};

use crate::error::GeometryError;
use crate::geometry::{Coord, Geometry};
use crate::path::{Path, PathList};

/// An x-monotone section of a supporting Bézier curve, over the parameter
/// range `[t0, t1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct XMonotoneCurve {
    support: RatBezier,
    t0: Rational,
    t1: Rational,
}

impl XMonotoneCurve {
    pub fn supporting_curve(&self) -> &RatBezier {
        &self.support
    }

    pub fn parameter_range(&self) -> (Coord, Coord) {
        (self.t0.to_f64().unwrap_or(0.0), self.t1.to_f64().unwrap_or(1.0))
    }

    /// Extracts the section as a standalone Bézier curve via de Casteljau
    /// subdivision over `[t0, t1]`.
    pub fn to_bezier(&self) -> RatBezier {
        if self.t0.is_zero() && self.t1.is_one() {
            return self.support.clone();
        }

        // A line segment only needs its endpoints interpolated
        if self.support.is_linear() {
            let a = self.support.control_point(0);
            let b = self.support.control_point(1);

            return RatBezier::new(vec![
                RatPoint::lerp(a, b, &self.t0),
                RatPoint::lerp(a, b, &self.t1),
            ]);
        }

        // Subdivide at t0 and keep the right half; then subdivide that at
        // the rescaled t1 and keep the left half
        let (_, right) = self.support.split(&self.t0);
        let t1 = (&self.t1 - &self.t0) / (Rational::one() - &self.t0);
        let (section, _) = right.split(&t1);

        section
    }
}

/// A cyclic boundary of x-monotone sections.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierPolygon {
    curves: Vec<XMonotoneCurve>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl BezierPolygon {
    pub fn new(curves: Vec<XMonotoneCurve>) -> BezierPolygon {
        BezierPolygon { curves }
    }

    pub fn curves(&self) -> &[XMonotoneCurve] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    // Twice the signed area enclosed by the boundary
    fn winding(&self) -> Coord {
        self.curves.iter().map(|c| c.to_bezier().to_curve().winding()).sum()
    }

    pub fn orientation(&self) -> Orientation {
        if self.winding() > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

/// A bounded region: one counter-clockwise outer boundary plus clockwise
/// hole boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonWithHoles {
    outer: BezierPolygon,
    holes: Vec<BezierPolygon>,
}

impl PolygonWithHoles {
    pub fn new(outer: BezierPolygon, holes: Vec<BezierPolygon>) -> PolygonWithHoles {
        PolygonWithHoles { outer, holes }
    }

    pub fn outer_boundary(&self) -> &BezierPolygon {
        &self.outer
    }

    pub fn holes(&self) -> &[BezierPolygon] {
        &self.holes
    }
}

pub type PolyList = Vec<PolygonWithHoles>;

// Parameters where the x-derivative vanishes, strictly inside (0, 1)
fn monotone_split_params(support: &RatBezier) -> Vec<Coord> {
    if support.is_linear() {
        return Vec::new();
    }

    let curve = support.to_curve();
    let (a, b, c, d) = match &curve {
        crate::curve::Curve::CubicBezier(bez) => (bez.a, bez.b, bez.c, bez.d),
        _ => return Vec::new(),
    };

    // x'(t)/3 = p(1-t)^2 + 2q t(1-t) + r t^2
    let p = b.x - a.x;
    let q = c.x - b.x;
    let r = d.x - c.x;

    let found = roots::find_roots_quadratic(p - 2.0 * q + r, 2.0 * (q - p), p);

    let mut params: Vec<Coord> = found.as_ref().iter()
        .filter(|&&t| t > 0.0 && t < 1.0)
        .copied()
        .collect();
    params.sort_by(|a, b| a.partial_cmp(b).unwrap());
    params.dedup_by(|a, b| a.roughly_equals(*b));
    params
}

/// Splits a curve into its x-monotone sections: one to three for a cubic,
/// always one for a line segment.
pub fn make_x_monotone(support: RatBezier) -> Result<Vec<XMonotoneCurve>, GeometryError> {
    let mut ts = vec![Rational::zero()];

    for t in monotone_split_params(&support) {
        let t = Rational::from_float(t).ok_or_else(|| {
            GeometryError::Kernel(format!("non-finite monotone split parameter {}", t))
        })?;
        ts.push(t);
    }

    ts.push(Rational::one());

    Ok(ts.windows(2)
        .map(|w| XMonotoneCurve {
            support: support.clone(),
            t0: w[0].clone(),
            t1: w[1].clone(),
        })
        .collect())
}

/// Converts closed paths into polygons-with-holes. Counter-clockwise paths
/// open a new polygon; clockwise paths become holes of the current one.
pub fn to_poly_list(paths: &PathList) -> Result<PolyList, GeometryError> {
    let mut poly_list = PolyList::new();
    let mut outer: Option<BezierPolygon> = None;
    let mut holes: Vec<BezierPolygon> = Vec::new();

    for path in paths {
        if path.is_empty() {
            continue;
        }

        if !path.is_closed() {
            return Err(GeometryError::NotClosed);
        }

        let start = RatPoint::from_point(path.initial_point())?;
        let mut mono_curves = Vec::new();

        for (j, curve) in path.iter().enumerate() {
            let mut support = RatBezier::from_curve(curve)?;

            // Eliminate the accumulated float error at the closing seam
            if j + 1 == path.len() {
                let last = support.num_control_points() - 1;
                support.set_control_point(last, start.clone());
            }

            mono_curves.extend(make_x_monotone(support)?);
        }

        let sub_poly = BezierPolygon::new(mono_curves);

        if sub_poly.orientation() == Orientation::CounterClockwise {
            if let Some(prev) = outer.take() {
                poly_list.push(PolygonWithHoles::new(prev, std::mem::replace(&mut holes, Vec::new())));
            }
            outer = Some(sub_poly);
        } else if outer.is_some() {
            holes.push(sub_poly);
        } else {
            log::warn!("isolated hole; discarding path");
        }
    }

    if let Some(prev) = outer.take() {
        poly_list.push(PolygonWithHoles::new(prev, holes));
    }

    Ok(poly_list)
}

/// Reconstructs one path per boundary, outer boundary first, then each
/// hole in order.
pub fn to_path_list(polys: &PolyList) -> Result<PathList, GeometryError> {
    let mut paths = PathList::new();

    for poly in polys {
        paths.push(to_path(poly.outer_boundary()));

        for hole in poly.holes() {
            paths.push(to_path(hole));
        }
    }

    Ok(paths)
}

fn to_path(poly: &BezierPolygon) -> Path {
    let mut path = Path::new();

    for mono in poly.curves() {
        let curve = mono.to_bezier().to_curve();

        if path.append(curve.clone()).is_err() {
            // Float drift at monotone seams; snap instead of aborting
            log::warn!("polygon boundary is noncontiguous; snapping curve to path end");

            let end = path.final_point();
            path.append(curve.with_initial_point(end))
                .expect("snapped curve starts at the path end");
        }
    }

    path
}
