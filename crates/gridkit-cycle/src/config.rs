//! Extrapolation settings.

use crate::error::CycleError;

/// Settings for an [`Extrapolator`](crate::Extrapolator).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtrapolationConfig {
    /// Maximum number of states to record before giving up with
    /// [`CycleError::HistoryLimit`]. `None` records until the target is
    /// reached.
    pub history_limit: Option<usize>,
}

impl ExtrapolationConfig {
    /// Check the settings for consistency.
    ///
    /// A history limit of zero can never record anything and is rejected.
    pub fn validate(&self) -> Result<(), CycleError> {
        if self.history_limit == Some(0) {
            return Err(CycleError::HistoryLimitZero);
        }
        Ok(())
    }
}
