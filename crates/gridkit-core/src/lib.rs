//! Core coordinate and geometry types for the gridkit toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other gridkit crate is built on:
//!
//! - [`Point2`] / [`Point3`]: structurally-compared integer points, unified
//!   by the [`Coordinate`] trait (sum, difference, Manhattan distance,
//!   neighbour enumeration).
//! - [`Direction`] and [`Turn`]: grid headings and 90° rotation.
//! - [`Bounds`]: closed-open axis-aligned rectangles.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod direction;
pub mod error;
pub mod point;

pub use bounds::{is_in_bounds, Bounds};
pub use direction::{Direction, Turn};
pub use error::GeometryError;
pub use point::{Coordinate, Neighbours, Point2, Point3};
