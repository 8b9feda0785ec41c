//! Gridkit: reusable building blocks for grid and state-machine puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! gridkit sub-crates. For most users, adding `gridkit` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridkit::prelude::*;
//!
//! // Parse a maze, then find the shortest route around its walls.
//! let maze = DenseGrid::from_rows(["S..#", ".#.#", "...E"].map(|r| r.chars())).unwrap();
//! let start = maze.iter().find(|(_, c)| **c == 'S').map(|(p, _)| p).unwrap();
//! let end = maze.iter().find(|(_, c)| **c == 'E').map(|(p, _)| p).unwrap();
//!
//! let mut problem = GridProblem::new(&maze, |&c| c != '#');
//! let result = bfs(&mut problem, start).unwrap();
//! assert_eq!(result.distance(&end), Some(5));
//! assert_eq!(result.path_to(&end).unwrap().len(), 6);
//!
//! // Where does a four-way rotation point after a trillion turns?
//! let out = extrapolate(
//!     Direction::Up,
//!     1_000_000_000_000,
//!     |d| *d,
//!     |d| { let n = d.rotate(Turn::Clockwise); (n, n) },
//! )
//! .unwrap();
//! assert_eq!(out.state, Direction::Up);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geom`] | `gridkit-core` | Points, directions, bounds, the `Coordinate` trait |
//! | [`store`] | `gridkit-store` | Structurally keyed maps and sets, `DefaultMap` |
//! | [`grid`] | `gridkit-grid` | Dense origin-shifted grids and sparse fields |
//! | [`search`] | `gridkit-search` | Breadth-first and weighted distance search |
//! | [`cycle`] | `gridkit-cycle` | Cycle detection and extrapolation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Points, directions, and bounds (`gridkit-core`).
///
/// [`geom::Point2`] and [`geom::Point3`] implement [`geom::Coordinate`],
/// which supplies Manhattan distance and neighbourhoods.
pub use gridkit_core as geom;

/// Structurally keyed containers (`gridkit-store`).
///
/// [`store::StructMap`] and [`store::StructSet`] key by value;
/// [`store::CodecMap`] and [`store::CodecSet`] key through a
/// [`store::KeyCodec`].
pub use gridkit_store as store;

/// Grid storage (`gridkit-grid`).
///
/// [`grid::DenseGrid`] for bounded, possibly origin-shifted regions;
/// [`grid::SparseField`] for unbounded ones.
pub use gridkit_grid as grid;

/// Graph search (`gridkit-search`).
///
/// Describe a graph with [`search::SearchProblem`] and explore it with
/// [`search::Bfs`] or [`search::dijkstra()`].
pub use gridkit_search as search;

/// Cycle-based extrapolation (`gridkit-cycle`).
///
/// [`cycle::Extrapolator`] answers "what happens after N steps" for huge N.
pub use gridkit_cycle as cycle;

/// Common imports for typical gridkit usage.
///
/// ```rust
/// use gridkit::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use gridkit_core::{Bounds, Coordinate, Direction, Point2, Point3, Turn};

    // Containers
    pub use gridkit_store::{DefaultMap, StructMap, StructSet};

    // Grids
    pub use gridkit_grid::{DenseGrid, SparseField};

    // Search
    pub use gridkit_search::{bfs, dijkstra, Bfs, FnProblem, GridProblem, SearchProblem};

    // Extrapolation
    pub use gridkit_cycle::{extrapolate, Extrapolator};

    // Errors
    pub use gridkit_core::GeometryError;
    pub use gridkit_cycle::CycleError;
    pub use gridkit_grid::GridError;
    pub use gridkit_search::SearchError;
}
