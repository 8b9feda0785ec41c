//! Error types for cycle extrapolation.

use std::error::Error;
use std::fmt;

/// Errors from [`Extrapolator::run`](crate::Extrapolator::run).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// A target of zero iterations has no result to report.
    ZeroTarget,
    /// More distinct states were recorded than the configured limit
    /// allows, without finding a cycle.
    HistoryLimit {
        /// The configured limit.
        limit: usize,
    },
    /// `history_limit` is `Some(0)`, which can never record a state.
    HistoryLimitZero,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTarget => write!(f, "target iteration count must be at least 1"),
            Self::HistoryLimit { limit } => {
                write!(f, "no cycle found within {limit} recorded states")
            }
            Self::HistoryLimitZero => write!(f, "history_limit must be at least 1"),
        }
    }
}

impl Error for CycleError {}
