//! Test fixtures and law checks for gridkit development.
//!
//! - [`fixtures`]: maze builders, a brute-force distance oracle, and a
//!   periodic state machine with a known pre-period and cycle.
//! - [`laws`]: assertions every [`Coordinate`](gridkit_core::Coordinate)
//!   implementation must satisfy.
//!
//! Call [`init_logging`] at the top of a test to see `log` output with
//! `RUST_LOG=debug cargo test`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod laws;

pub use fixtures::{brute_force_distances, maze_from_rows, open_grid, PeriodicCounter};

/// Install `env_logger` for the test harness.
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
