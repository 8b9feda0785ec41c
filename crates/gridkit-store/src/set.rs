//! Hash set keyed through a [`KeyCodec`].

use crate::codec::{Identity, KeyCodec};
use indexmap::IndexSet;
use std::fmt;

/// Insertion-ordered set whose members pass through a [`KeyCodec`].
pub struct CodecSet<C: KeyCodec> {
    codec: C,
    members: IndexSet<C::Key>,
}

/// [`CodecSet`] over values that are already `Hash + Eq`.
pub type StructSet<T> = CodecSet<Identity<T>>;

impl<T> CodecSet<Identity<T>>
where
    Identity<T>: KeyCodec<Item = T, Key = T>,
{
    /// Create an empty set keyed by value.
    pub fn new() -> Self {
        Self::with_codec(Identity::new())
    }
}

impl<C: KeyCodec> CodecSet<C> {
    /// Create an empty set using `codec` for its members.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            members: IndexSet::new(),
        }
    }

    /// Add `item`; returns `false` if an equal encoding was already present.
    pub fn insert(&mut self, item: C::Item) -> bool {
        let encoded = self.codec.encode(&item);
        self.members.insert(encoded)
    }

    /// `true` if an equal encoding is present.
    pub fn contains(&self, item: &C::Item) -> bool {
        self.members.contains(&self.codec.encode(item))
    }

    /// Remove `item`; returns whether it was present.
    pub fn remove(&mut self, item: &C::Item) -> bool {
        let encoded = self.codec.encode(item);
        self.members.shift_remove(&encoded)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drop every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Decoded members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = C::Item> + '_ {
        self.members.iter().map(|k| self.codec.decode(k))
    }
}

impl<C: KeyCodec + Default> Default for CodecSet<C> {
    fn default() -> Self {
        Self::with_codec(C::default())
    }
}

impl<C: KeyCodec + Clone> Clone for CodecSet<C>
where
    C::Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
            members: self.members.clone(),
        }
    }
}

impl<C: KeyCodec> fmt::Debug for CodecSet<C>
where
    C::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members.iter()).finish()
    }
}

impl<C: KeyCodec> Extend<C::Item> for CodecSet<C> {
    fn extend<I: IntoIterator<Item = C::Item>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> FromIterator<T> for CodecSet<Identity<T>>
where
    Identity<T>: KeyCodec<Item = T, Key = T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FnCodec;
    use gridkit_core::{Direction, Point2};

    #[test]
    fn insert_reports_novelty() {
        let mut s = StructSet::new();
        assert!(s.insert(Point2::new(0, 0)));
        assert!(!s.insert(Point2::new(0, 0)));
        assert!(s.insert(Point2::new(0, 1)));
        assert_eq!(s.len(), 2);
        assert!(s.remove(&Point2::new(0, 0)));
        assert!(!s.remove(&Point2::new(0, 0)));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Point2::new(0, 1)]);
    }

    #[test]
    fn projection_codec_ignores_fields() {
        // Visited-state set that tracks position only, ignoring heading.
        let codec = FnCodec::new(
            |&(p, _): &(Point2, Direction)| p,
            |&p: &Point2| (p, Direction::Up),
        );
        let mut visited = CodecSet::with_codec(codec);
        assert!(visited.insert((Point2::new(2, 2), Direction::Left)));
        assert!(!visited.insert((Point2::new(2, 2), Direction::Down)));
        assert!(visited.contains(&(Point2::new(2, 2), Direction::Right)));
    }

    #[test]
    fn collected_set_dedups_and_keeps_order() {
        let s: StructSet<i32> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        let mut t = s.clone();
        t.clear();
        assert!(t.is_empty());
        assert!(s.contains(&2));
    }
}
