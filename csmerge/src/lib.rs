//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate arrayvec;
extern crate derive_more;
extern crate env_logger;
extern crate log;
extern crate num_bigint;
extern crate num_rational;
extern crate num_traits;
extern crate once_cell;
extern crate ordered_float;
extern crate roots;
extern crate thiserror;

mod boolean;
mod charstring;
mod config;
mod curve;
mod error;
mod geometry;
mod path;
mod polygon;
mod vec_utils;

pub use boolean::{compute_union, union_poly_lists};
pub use charstring::*;
pub use config::*;
pub use curve::*;
pub use error::*;
pub use geometry::{Coord, Point};
pub use path::*;
pub use polygon::*;

/// The polyline fallback backend for environments where the curved union
/// is too expensive.
pub use boolean::approx_beziers;
