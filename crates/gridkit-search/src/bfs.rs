//! Breadth-first distance search.
//!
//! The frontier is a FIFO queue and the first discovery of a coordinate is
//! permanent: its distance and parent are never revised. That is exact for
//! unit costs and for costs that never decrease along a path. A cost
//! function that can reach an already-visited coordinate more cheaply via a
//! later path is *not* re-relaxed here; use [`dijkstra`](crate::dijkstra())
//! for that.

use crate::error::SearchError;
use crate::problem::{SearchProblem, Visit};
use crate::result::{Outcome, SearchResult};
use indexmap::IndexMap;
use std::collections::VecDeque;

type StopPredicate<'a, C, Cell> = Box<dyn FnMut(&Visit<C, Cell>) -> bool + 'a>;

/// Configured breadth-first search from one start coordinate.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coordinate, Point2};
/// use gridkit_search::{Bfs, FnProblem, Outcome};
///
/// let mut plane = FnProblem::from_filter(
///     |_: &Point2| true,
///     |c: &Point2| c.surrounding(),
///     |from, _, _| Some(from.distance + 1),
/// );
/// // Unbounded space: stop at the first cell three steps away.
/// let result = Bfs::new(Point2::new(0, 0))
///     .stop_when(|v| v.distance == 3)
///     .run(&mut plane)
///     .unwrap();
/// assert_eq!(result.outcome(), Outcome::Stopped);
/// assert_eq!(result.stopped_at().map(|v| v.distance), Some(3));
/// ```
pub struct Bfs<'a, C, Cell> {
    start: C,
    stop: Option<StopPredicate<'a, C, Cell>>,
    max_visits: Option<usize>,
}

impl<'a, C, Cell> Bfs<'a, C, Cell>
where
    C: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    /// A search from `start` with no stop predicate and no visit cap.
    pub fn new(start: C) -> Self {
        Self {
            start,
            stop: None,
            max_visits: None,
        }
    }

    /// Halt as soon as a recorded visit satisfies `pred`.
    ///
    /// The start visit is tested too, so a predicate that accepts the start
    /// returns a single-visit result.
    ///
    /// The builder does not see the problem until [`run`](Self::run), so a
    /// predicate that reads `v.cell` needs its parameter type spelled out:
    ///
    /// ```
    /// use gridkit_core::Point2;
    /// use gridkit_grid::DenseGrid;
    /// use gridkit_search::{Bfs, GridProblem, Visit};
    ///
    /// let maze = DenseGrid::from_rows(["..x", "...", "x.."].map(|r| r.chars())).unwrap();
    /// let mut problem = GridProblem::new(&maze, |_| true);
    /// let result = Bfs::new(Point2::new(0, 0))
    ///     .stop_when(|v: &Visit<Point2, &char>| *v.cell == 'x')
    ///     .run(&mut problem)
    ///     .unwrap();
    /// assert_eq!(result.stopped_at().map(|v| v.distance), Some(2));
    /// ```
    pub fn stop_when(mut self, pred: impl FnMut(&Visit<C, Cell>) -> bool + 'a) -> Self {
        self.stop = Some(Box::new(pred));
        self
    }

    /// Record at most `limit` visits, the start included.
    ///
    /// A search that would exceed the cap returns what it has with
    /// [`Outcome::Truncated`]. A cap of 0 behaves like a cap of 1.
    pub fn max_visits(mut self, limit: usize) -> Self {
        self.max_visits = Some(limit.max(1));
        self
    }

    /// Run the search against `problem`.
    ///
    /// Returns `Err(SearchError::StartNotFound)` if the start coordinate
    /// does not resolve to a cell.
    pub fn run<P>(mut self, problem: &mut P) -> Result<SearchResult<C, Cell>, SearchError>
    where
        P: SearchProblem<Coord = C, Cell = Cell>,
    {
        let cell = problem
            .cell(&self.start)
            .ok_or_else(|| SearchError::StartNotFound {
                start: format!("{:?}", self.start),
            })?;

        let mut visits: IndexMap<C, Visit<C, Cell>> = IndexMap::new();
        visits.insert(
            self.start.clone(),
            Visit {
                coord: self.start.clone(),
                cell,
                distance: 0,
                parent: None,
            },
        );
        if self.accepts(&visits[0]) {
            return Ok(self.finish(visits, Outcome::Stopped, Some(0)));
        }

        let mut queue = VecDeque::from([0usize]);
        while let Some(current) = queue.pop_front() {
            let coord = visits[current].coord.clone();
            log::trace!("expanding {coord:?} at distance {}", visits[current].distance);

            for next in problem.neighbours(&coord) {
                if visits.contains_key(&next) {
                    continue;
                }
                let Some(cell) = problem.cell(&next) else {
                    continue;
                };
                let Some(distance) = problem.step_cost(&visits[current], &next, &cell) else {
                    continue;
                };
                if self.max_visits.is_some_and(|cap| visits.len() >= cap) {
                    return Ok(self.finish(visits, Outcome::Truncated, None));
                }

                let (index, _) = visits.insert_full(
                    next.clone(),
                    Visit {
                        coord: next,
                        cell,
                        distance,
                        parent: Some(current),
                    },
                );
                if self.accepts(&visits[index]) {
                    return Ok(self.finish(visits, Outcome::Stopped, Some(index)));
                }
                queue.push_back(index);
            }
        }

        Ok(self.finish(visits, Outcome::Exhausted, None))
    }

    fn accepts(&mut self, visit: &Visit<C, Cell>) -> bool {
        self.stop.as_mut().is_some_and(|pred| pred(visit))
    }

    fn finish(
        self,
        visits: IndexMap<C, Visit<C, Cell>>,
        outcome: Outcome,
        stopped_at: Option<usize>,
    ) -> SearchResult<C, Cell> {
        log::debug!(
            "bfs from {:?}: {} visits, {outcome:?}",
            self.start,
            visits.len()
        );
        SearchResult::new(self.start, visits, outcome, stopped_at)
    }
}

/// Exhaustive breadth-first search from `start`.
pub fn bfs<P>(problem: &mut P, start: P::Coord) -> Result<SearchResult<P::Coord, P::Cell>, SearchError>
where
    P: SearchProblem,
{
    Bfs::new(start).run(problem)
}
