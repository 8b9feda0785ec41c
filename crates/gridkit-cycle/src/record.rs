//! Per-run bookkeeping of seen states and produced results.

use indexmap::IndexMap;
use std::hash::Hash;

/// States seen and results produced during one extrapolation run.
///
/// Entry `i` is the `(state, result)` produced by iteration `i`, that is,
/// after `i + 1` transitions. `first_seen` maps a state key to the
/// iteration at which that state was about to be transformed.
#[derive(Clone, Debug)]
pub struct CycleRecord<K, S, R> {
    seen: IndexMap<K, usize>,
    history: Vec<(S, R)>,
}

impl<K: Hash + Eq, S, R> CycleRecord<K, S, R> {
    /// An empty record.
    pub fn new() -> Self {
        Self {
            seen: IndexMap::new(),
            history: Vec::new(),
        }
    }

    /// Number of iterations recorded.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// `true` before the first iteration.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Iteration at which a state with this key was first transformed.
    pub fn first_seen(&self, key: &K) -> Option<usize> {
        self.seen.get(key).copied()
    }

    /// The `(state, result)` produced by iteration `i`.
    pub fn entry(&self, i: usize) -> Option<(&S, &R)> {
        self.history.get(i).map(|(s, r)| (s, r))
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.seen.clear();
        self.history.clear();
    }

    /// Note that the state about to be transformed at `iteration` has
    /// `key`. Returns the earlier iteration if the key was already seen.
    pub(crate) fn observe(&mut self, key: K, iteration: usize) -> Option<usize> {
        match self.seen.get(&key) {
            Some(&first) => Some(first),
            None => {
                self.seen.insert(key, iteration);
                None
            }
        }
    }

    /// Entry `i`; `i` must be below [`len`](Self::len).
    pub(crate) fn at(&self, i: usize) -> &(S, R) {
        &self.history[i]
    }

    pub(crate) fn push(&mut self, state: S, result: R) {
        self.history.push((state, result));
    }
}

impl<K: Hash + Eq, S, R> Default for CycleRecord<K, S, R> {
    fn default() -> Self {
        Self::new()
    }
}
