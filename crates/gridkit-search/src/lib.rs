//! Breadth-first distance search over arbitrary coordinate graphs.
//!
//! A [`SearchProblem`] describes the graph: which coordinates exist, which
//! coordinates neighbour each other, and what distance an accepted edge
//! assigns. [`Bfs`] explores it with a FIFO frontier where the first
//! discovery of a coordinate is final; [`dijkstra()`] is the weighted variant
//! that keeps relaxing until a coordinate is settled.
//!
//! [`GridProblem`] plugs a `DenseGrid` straight in; [`FnProblem`] builds a
//! problem from three closures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bfs;
pub mod dijkstra;
pub mod error;
pub mod grid;
pub mod problem;
pub mod result;

pub use bfs::{bfs, Bfs};
pub use dijkstra::dijkstra;
pub use error::SearchError;
pub use grid::GridProblem;
pub use problem::{Candidates, FnProblem, SearchProblem, Visit};
pub use result::{Outcome, SearchResult};
