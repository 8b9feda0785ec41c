//! Map that fills missing entries from a factory on first access.

use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

/// Insertion-ordered map that materializes a default value on a miss.
///
/// The factory runs exactly once per missing key, at the moment the key is
/// first touched through [`ensure_and_get`](Self::ensure_and_get) or
/// [`update`](Self::update). Read-only lookups never insert.
///
/// # Examples
///
/// ```
/// use gridkit_store::DefaultMap;
///
/// let mut counts: DefaultMap<char, usize> = DefaultMap::default();
/// for ch in "abracadabra".chars() {
///     counts.update(ch, |n| *n += 1);
/// }
/// assert_eq!(counts.get(&'a'), Some(&5));
/// assert_eq!(counts.get(&'z'), None);
/// ```
pub struct DefaultMap<K, V, F = fn() -> V> {
    entries: IndexMap<K, V>,
    factory: F,
}

impl<K, V, F> DefaultMap<K, V, F>
where
    K: Hash + Eq,
    F: FnMut() -> V,
{
    /// Create an empty map backed by `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            entries: IndexMap::new(),
            factory,
        }
    }

    /// Value for `key`, inserting a factory default if absent.
    pub fn ensure_and_get(&mut self, key: K) -> &mut V {
        let factory = &mut self.factory;
        self.entries.entry(key).or_insert_with(factory)
    }

    /// Apply `f` to the existing-or-default value for `key` in place.
    ///
    /// Returns whatever `f` returns.
    pub fn update<R>(&mut self, key: K, f: impl FnOnce(&mut V) -> R) -> R {
        f(self.ensure_and_get(key))
    }

    /// Shared access without materializing a default.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// `true` if `key` has been materialized.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove and return the value for `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Number of materialized entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been materialized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Drop the factory and return the plain map.
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.entries
    }
}

impl<K: Hash + Eq, V: Default> Default for DefaultMap<K, V, fn() -> V> {
    fn default() -> Self {
        Self::new(V::default)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, F> fmt::Debug for DefaultMap<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::Point2;

    #[test]
    fn factory_runs_once_per_miss() {
        let mut calls = 0;
        let mut m = DefaultMap::new(|| {
            calls += 1;
            Vec::<u32>::new()
        });
        m.ensure_and_get(Point2::new(0, 0)).push(1);
        m.ensure_and_get(Point2::new(0, 0)).push(2);
        m.update(Point2::new(1, 0), |v| v.push(3));
        m.update(Point2::new(1, 0), |v| v.push(4));
        assert_eq!(m.get(&Point2::new(0, 0)), Some(&vec![1, 2]));
        assert_eq!(m.get(&Point2::new(1, 0)), Some(&vec![3, 4]));
        assert_eq!(m.len(), 2);
        drop(m);
        assert_eq!(calls, 2);
    }

    #[test]
    fn lookups_do_not_materialize() {
        let mut m: DefaultMap<&str, i32> = DefaultMap::default();
        assert_eq!(m.get(&"x"), None);
        assert!(!m.contains_key(&"x"));
        assert!(m.is_empty());
        assert_eq!(*m.ensure_and_get("x"), 0);
        assert!(m.contains_key(&"x"));
        assert_eq!(m.remove(&"x"), Some(0));
    }

    #[test]
    fn update_returns_closure_result() {
        let mut m: DefaultMap<u8, u64> = DefaultMap::new(|| 10);
        let after = m.update(7, |v| {
            *v *= 3;
            *v
        });
        assert_eq!(after, 30);
        let order: Vec<u8> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec![7]);
        assert_eq!(m.into_inner().get(&7), Some(&30));
    }
}
