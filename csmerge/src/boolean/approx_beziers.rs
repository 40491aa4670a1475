//--------------------------------------------------------------------
// approx_beziers.rs
//--------------------------------------------------------------------
// Fallback backend that tessellates cubics into polylines before
// running the union, for environments where the curved overlay is
// too expensive
//--------------------------------------------------------------------

use crate::config::{max_lsegs_per_bezier, min_lseg_length};
use crate::curve::Curve;
use crate::error::GeometryError;
use crate::geometry::Coord;
use crate::path::{Path, PathList};

/// Replaces every cubic Bézier with a chain of line segments. The segment
/// count aims at `MIN_LSEG_LENGTH` per segment, capped at
/// `MAX_LSEGS_PER_BEZIER`.
pub fn to_linear_paths(paths: &PathList) -> Result<PathList, GeometryError> {
    paths.iter().map(to_linear_path).collect()
}

fn to_linear_path(path: &Path) -> Result<Path, GeometryError> {
    let mut linear = Path::new();

    for curve in path {
        match curve {
            Curve::Line(_) => linear.append(curve.clone())?,
            Curve::CubicBezier(bezier) => {
                // Estimate the arc length by the control polygon
                let length = (bezier.b - bezier.a).length()
                    + (bezier.c - bezier.b).length()
                    + (bezier.d - bezier.c).length();

                let cap = max_lsegs_per_bezier().max(1.0);
                let n = (length / min_lseg_length()).ceil().min(cap).max(1.0) as usize;

                let mut a = curve.at(0.0);
                for i in 1..=n {
                    let b = curve.at(i as Coord / n as Coord);
                    linear.append(Curve::line(a, b))?;
                    a = b;
                }
            }
        }
    }

    Ok(linear)
}

pub fn compute_union(paths1: &PathList, paths2: &PathList) -> Result<PathList, GeometryError> {
    let linear1 = to_linear_paths(paths1)?;
    let linear2 = to_linear_paths(paths2)?;

    super::union_paths(&linear1, &linear2)
}
