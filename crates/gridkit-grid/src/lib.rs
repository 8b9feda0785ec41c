//! Grid storage for gridkit.
//!
//! Two complementary containers addressed by [`Point2`](gridkit_core::Point2):
//!
//! - [`DenseGrid`]: fixed-size row-major buffer with an origin offset
//!   (`delta`), so logical coordinates need not start at zero.
//! - [`SparseField`]: unbounded map that computes its bounds on demand and
//!   materializes into a [`DenseGrid`] whose delta is its top-left corner.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod error;
pub mod sparse;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseGrid;
pub use error::GridError;
pub use sparse::SparseField;
