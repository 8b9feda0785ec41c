//! Error types for grid operations.

use gridkit_core::{GeometryError, Point2};
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or checked access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate maps outside the grid after offset adjustment.
    OutOfBounds {
        /// The offending coordinate, as passed by the caller.
        coord: Point2,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A coordinate is in range but holds no value.
    EmptyCell {
        /// The unoccupied coordinate.
        coord: Point2,
    },
    /// Rows passed to a constructor have differing lengths.
    RaggedRows {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A geometric precondition failed.
    Geometry(GeometryError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptyCell { coord } => write!(f, "cell {coord} is empty"),
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} cells, expected {expected}"),
            Self::Geometry(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeometryError> for GridError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
