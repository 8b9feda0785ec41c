//! Extrapolate huge iteration counts by detecting periodic state.
//!
//! Given a transition `state -> (state, result)` and a target count far too
//! large to simulate, [`Extrapolator`] runs transitions until the state
//! (as seen through a caller-chosen key) repeats, then reads the answer for
//! the target off the recorded cycle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extrapolate;
pub mod record;

pub use config::ExtrapolationConfig;
pub use error::CycleError;
pub use extrapolate::{extrapolate, Cycle, Extrapolation, Extrapolator};
pub use record::CycleRecord;
