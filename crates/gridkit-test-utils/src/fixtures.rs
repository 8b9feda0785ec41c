//! Reusable search and extrapolation fixtures.
//!
//! - [`maze_from_rows`] / [`open_grid`]: character grids for search tests.
//! - [`brute_force_distances`]: a relaxation-to-fixpoint oracle that shares
//!   no code with the search engine.
//! - [`PeriodicCounter`]: a transition with a known pre-period and cycle.

use gridkit_core::{Coordinate, Point2};
use gridkit_grid::DenseGrid;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Character grid from equal-length rows, top row first.
///
/// Panics on ragged rows; fixtures are expected to be well formed.
pub fn maze_from_rows(rows: &[&str]) -> DenseGrid<char> {
    match DenseGrid::from_rows(rows.iter().map(|r| r.chars())) {
        Ok(grid) => grid,
        Err(e) => panic!("bad fixture: {e}"),
    }
}

/// A `width * height` grid where every cell holds `'.'`.
pub fn open_grid(width: usize, height: usize) -> DenseGrid<char> {
    DenseGrid::filled(width, height, '.')
}

/// Unit-cost orthogonal distances from `start` over cells `passable`
/// accepts, computed by repeated relaxation until nothing changes.
///
/// Quadratic and slow; only for cross-checking on small grids.
pub fn brute_force_distances<T>(
    grid: &DenseGrid<T>,
    start: Point2,
    passable: impl Fn(&T) -> bool,
) -> HashMap<Point2, u64> {
    let open = |c: Point2| grid.get(c).is_some_and(&passable);
    let mut dist: HashMap<Point2, u64> = HashMap::new();
    if !open(start) {
        return dist;
    }
    dist.insert(start, 0);
    loop {
        let mut changed = false;
        for c in grid.positions() {
            if !open(c) {
                continue;
            }
            let best = c
                .surrounding()
                .into_iter()
                .filter_map(|n| dist.get(&n).map(|d| d + 1))
                .min();
            if let Some(candidate) = best {
                let entry = dist.entry(c).or_insert(u64::MAX);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Counts `0, 1, 2, ...` up to `prefix + period - 1`, then jumps back to
/// `prefix`, so the state sequence enters a cycle of length `period` after
/// `prefix` steps.
///
/// Each transition yields `(next_state, next_state * 10)`. Calls are
/// counted so tests can check how many transitions were actually run.
pub struct PeriodicCounter {
    pub prefix: u64,
    pub period: u64,
    calls: AtomicUsize,
}

impl PeriodicCounter {
    pub fn new(prefix: u64, period: u64) -> Self {
        assert!(period > 0, "period must be positive");
        Self {
            prefix,
            period,
            calls: AtomicUsize::new(0),
        }
    }

    /// One transition.
    pub fn step(&self, state: u64) -> (u64, u64) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let next = if state + 1 < self.prefix + self.period {
            state + 1
        } else {
            self.prefix
        };
        (next, next * 10)
    }

    /// The `(state, result)` produced by transition number `n` (1-based),
    /// computed by direct simulation from state 0.
    pub fn simulate(&self, n: u64) -> (u64, u64) {
        let mut state = 0;
        let mut result = 0;
        for _ in 0..n {
            (state, result) = self.step(state);
        }
        (state, result)
    }

    /// How many times [`step`](Self::step) has run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}
