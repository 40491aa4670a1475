//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The error taxonomy surfaced by the public API
//--------------------------------------------------------------------

use crate::thiserror::Error;

use crate::charstring::CsToken;
use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("paths must consist of contiguous curves; path end: {path_end}, curve start: {curve_start}")]
    NoncontiguousCurves { path_end: Point, curve_start: Point },

    #[error("cannot make polygon from path; path is not closed")]
    NotClosed,

    /// Propagated from the arithmetic kernel.
    #[error("error from arithmetic kernel: {0}")]
    Kernel(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unrecognised token '{0}'")]
    UnrecognisedToken(CsToken),

    #[error("wrong number of arguments for '{op}' ({nargs} found)")]
    WrongNumberOfArguments { op: &'static str, nargs: usize },

    #[error("token '{0}' is not implemented")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A parse failure, wrapped with the index of the offending token and a
/// snapshot of the operand stack it consumed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{kind} (token index: {index}, stack: {stack:?})")]
    AtToken {
        kind: ParseErrorKind,
        index: usize,
        stack: Vec<i32>,
    },

    #[error("redundant arguments on stack: {stack:?}")]
    RedundantArguments { stack: Vec<i32> },
}

impl ParseError {
    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            ParseError::AtToken { kind, .. } => Some(kind),
            ParseError::RedundantArguments { .. } => None,
        }
    }
}

/// Top-level error type of `merge_charstrings`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
