//! Error types for graph search.

use std::error::Error;
use std::fmt;

/// Errors that abort a search before or during traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start coordinate does not resolve to a cell.
    StartNotFound {
        /// Debug rendering of the start coordinate.
        start: String,
    },
    /// A weighted search saw an edge that lowers the running distance.
    DecreasingCost {
        /// Debug rendering of the coordinate being expanded.
        from: String,
        /// Distance of the coordinate being expanded.
        from_distance: u64,
        /// Distance the cost function returned for the neighbour.
        returned: u64,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNotFound { start } => write!(f, "cannot find starting cell {start}"),
            Self::DecreasingCost {
                from,
                from_distance,
                returned,
            } => write!(
                f,
                "edge from {from} (distance {from_distance}) returned smaller distance {returned}"
            ),
        }
    }
}

impl Error for SearchError {}
