//! Searching a [`DenseGrid`] directly.

use crate::problem::{Candidates, SearchProblem, Visit};
use gridkit_core::{Coordinate, Point2};
use gridkit_grid::DenseGrid;

/// Unit-cost [`SearchProblem`] over the occupied cells of a [`DenseGrid`].
///
/// A cell exists if it is occupied and `passable` accepts its value. Moves
/// are orthogonal unless [`with_diagonals`](Self::with_diagonals) is set.
///
/// # Examples
///
/// ```
/// use gridkit_core::Point2;
/// use gridkit_grid::DenseGrid;
/// use gridkit_search::{bfs, GridProblem};
///
/// let maze = DenseGrid::from_rows(["..#", ".##", "..."].map(|r| r.chars())).unwrap();
/// let mut problem = GridProblem::new(&maze, |&c| c != '#');
/// let result = bfs(&mut problem, Point2::new(0, 0)).unwrap();
/// assert_eq!(result.distance(&Point2::new(2, 2)), Some(4));
/// assert_eq!(result.distance(&Point2::new(2, 0)), None);
/// ```
pub struct GridProblem<'g, T, F> {
    grid: &'g DenseGrid<T>,
    passable: F,
    diagonals: bool,
}

impl<'g, T, F> GridProblem<'g, T, F>
where
    F: FnMut(&T) -> bool,
{
    /// Search `grid`, entering only cells `passable` accepts.
    pub fn new(grid: &'g DenseGrid<T>, passable: F) -> Self {
        Self {
            grid,
            passable,
            diagonals: false,
        }
    }

    /// Also allow the four diagonal moves, each costing one step.
    pub fn with_diagonals(mut self) -> Self {
        self.diagonals = true;
        self
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'g DenseGrid<T> {
        self.grid
    }
}

impl<'g, T, F> SearchProblem for GridProblem<'g, T, F>
where
    F: FnMut(&T) -> bool,
{
    type Coord = Point2;
    type Cell = &'g T;

    fn cell(&mut self, coord: &Point2) -> Option<&'g T> {
        let grid: &'g DenseGrid<T> = self.grid;
        grid.get(*coord).filter(|value| (self.passable)(value))
    }

    fn neighbours(&mut self, coord: &Point2) -> Candidates<Point2> {
        if self.diagonals {
            coord.full_surrounding()
        } else {
            coord.surrounding()
        }
    }

    fn step_cost(&mut self, from: &Visit<Point2, &'g T>, _: &Point2, _: &&'g T) -> Option<u64> {
        Some(from.distance + 1)
    }
}
