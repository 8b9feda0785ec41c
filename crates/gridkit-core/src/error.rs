//! Error types for geometry operations.

use crate::point::Point2;
use std::error::Error;
use std::fmt;

/// Errors arising from constructing or deriving geometric regions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Bounds were requested for a collection with no points.
    EmptyPointSet,
    /// A bounds size had a negative component.
    NegativeSize {
        /// The offending size vector.
        size: Point2,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => write!(f, "cannot compute bounds of an empty point set"),
            Self::NegativeSize { size } => {
                write!(f, "bounds size {size} has a negative component")
            }
        }
    }
}

impl Error for GeometryError {}
