//! What a finished search leaves behind.

use crate::problem::Visit;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// Why a search returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The frontier emptied; every reachable coordinate was visited.
    Exhausted,
    /// The stop predicate accepted a visit.
    Stopped,
    /// The visit cap was hit before the frontier emptied.
    Truncated,
}

/// Visits recorded by a search, keyed by coordinate.
///
/// Iteration follows discovery order, so the start comes first and, for a
/// unit-cost search, distances never decrease along the iteration.
pub struct SearchResult<C, Cell> {
    start: C,
    visits: IndexMap<C, Visit<C, Cell>>,
    outcome: Outcome,
    stopped_at: Option<usize>,
}

impl<C: Clone + Eq + Hash, Cell> SearchResult<C, Cell> {
    pub(crate) fn new(
        start: C,
        visits: IndexMap<C, Visit<C, Cell>>,
        outcome: Outcome,
        stopped_at: Option<usize>,
    ) -> Self {
        Self {
            start,
            visits,
            outcome,
            stopped_at,
        }
    }

    /// The coordinate distance 0 was assigned to.
    pub fn start(&self) -> &C {
        &self.start
    }

    /// Distance to `coord`, or `None` if it was never reached.
    pub fn distance(&self, coord: &C) -> Option<u64> {
        self.visits.get(coord).map(|v| v.distance)
    }

    /// The full visit record for `coord`.
    pub fn visit(&self, coord: &C) -> Option<&Visit<C, Cell>> {
        self.visits.get(coord)
    }

    /// `true` if `coord` was reached.
    pub fn contains(&self, coord: &C) -> bool {
        self.visits.contains_key(coord)
    }

    /// Number of visited coordinates, the start included.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Always `false`: the start is recorded before anything can fail.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Visits in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Visit<C, Cell>> + '_ {
        self.visits.values()
    }

    /// `(coordinate, distance)` pairs in discovery order.
    pub fn distances(&self) -> impl Iterator<Item = (&C, u64)> + '_ {
        self.visits.iter().map(|(c, v)| (c, v.distance))
    }

    /// Coordinates from the start to `target`, both inclusive.
    ///
    /// Returns `None` if `target` was not reached.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{Coordinate, Point2};
    /// use gridkit_search::{bfs, FnProblem};
    ///
    /// let mut corridor = FnProblem::from_filter(
    ///     |c: &Point2| c.y == 0 && (0..4).contains(&c.x),
    ///     |c: &Point2| c.surrounding(),
    ///     |from, _, _| Some(from.distance + 1),
    /// );
    /// let result = bfs(&mut corridor, Point2::new(0, 0)).unwrap();
    /// let path = result.path_to(&Point2::new(3, 0)).unwrap();
    /// assert_eq!(path.len(), 4);
    /// assert_eq!(path[0], Point2::new(0, 0));
    /// ```
    pub fn path_to(&self, target: &C) -> Option<Vec<C>> {
        let mut index = self.visits.get_index_of(target)?;
        let mut path = Vec::new();
        loop {
            let (coord, visit) = self.visits.get_index(index)?;
            path.push(coord.clone());
            match visit.parent {
                Some(parent) => index = parent,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// The visit that satisfied the stop predicate, if any.
    pub fn stopped_at(&self) -> Option<&Visit<C, Cell>> {
        self.stopped_at
            .and_then(|i| self.visits.get_index(i))
            .map(|(_, v)| v)
    }

    /// A visit with the greatest distance; the earliest discovered on ties.
    pub fn farthest(&self) -> Option<&Visit<C, Cell>> {
        self.visits
            .values()
            .fold(None, |best: Option<&Visit<C, Cell>>, v| match best {
                Some(b) if b.distance >= v.distance => Some(b),
                _ => Some(v),
            })
    }

    /// Why the search returned.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl<C: fmt::Debug, Cell: fmt::Debug> fmt::Debug for SearchResult<C, Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("start", &self.start)
            .field("visits", &self.visits.len())
            .field("outcome", &self.outcome)
            .field("stopped_at", &self.stopped_at)
            .finish()
    }
}
