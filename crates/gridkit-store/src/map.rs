//! Hash map keyed through a [`KeyCodec`].

use crate::codec::{Identity, KeyCodec};
use indexmap::IndexMap;
use std::fmt;

/// Insertion-ordered map whose keys pass through a [`KeyCodec`].
///
/// Lookups encode the caller's key; iteration decodes stored keys back.
/// Removal preserves the relative order of the remaining entries.
pub struct CodecMap<C: KeyCodec, V> {
    codec: C,
    entries: IndexMap<C::Key, V>,
}

/// [`CodecMap`] over keys that are already `Hash + Eq`.
pub type StructMap<K, V> = CodecMap<Identity<K>, V>;

impl<K, V> CodecMap<Identity<K>, V>
where
    Identity<K>: KeyCodec<Item = K, Key = K>,
{
    /// Create an empty map keyed by value.
    pub fn new() -> Self {
        Self::with_codec(Identity::new())
    }
}

impl<C: KeyCodec, V> CodecMap<C, V> {
    /// Create an empty map using `codec` for its keys.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            entries: IndexMap::new(),
        }
    }

    /// Insert or overwrite; returns the previous value.
    pub fn insert(&mut self, key: C::Item, value: V) -> Option<V> {
        let encoded = self.codec.encode(&key);
        self.entries.insert(encoded, value)
    }

    /// `true` if an entry encodes like `key`.
    pub fn contains_key(&self, key: &C::Item) -> bool {
        self.entries.contains_key(&self.codec.encode(key))
    }

    /// Shared access to the value stored for `key`.
    pub fn get(&self, key: &C::Item) -> Option<&V> {
        self.entries.get(&self.codec.encode(key))
    }

    /// Mutable access to the value stored for `key`.
    pub fn get_mut(&mut self, key: &C::Item) -> Option<&mut V> {
        let encoded = self.codec.encode(key);
        self.entries.get_mut(&encoded)
    }

    /// Value for `key`, inserting `make()` first if absent.
    pub fn get_or_insert_with(&mut self, key: C::Item, make: impl FnOnce() -> V) -> &mut V {
        let encoded = self.codec.encode(&key);
        self.entries.entry(encoded).or_insert_with(make)
    }

    /// Remove and return the value for `key`.
    pub fn remove(&mut self, key: &C::Item) -> Option<V> {
        let encoded = self.codec.encode(key);
        self.entries.shift_remove(&encoded)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, keeping the codec.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Decoded keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = C::Item> + '_ {
        self.entries.keys().map(|k| self.codec.decode(k))
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values()
    }

    /// Mutable values in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.entries.values_mut()
    }

    /// Decoded `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (C::Item, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (self.codec.decode(k), v))
    }

    /// Consume the map, yielding decoded `(key, value)` pairs in order.
    pub fn into_entries(self) -> impl Iterator<Item = (C::Item, V)> {
        let codec = self.codec;
        self.entries
            .into_iter()
            .map(move |(k, v)| (codec.decode(&k), v))
    }

    /// Stored keys without decoding.
    pub fn encoded_keys(&self) -> impl Iterator<Item = &C::Key> + '_ {
        self.entries.keys()
    }

    /// The codec in use.
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: KeyCodec + Default, V> Default for CodecMap<C, V> {
    fn default() -> Self {
        Self::with_codec(C::default())
    }
}

impl<C: KeyCodec + Clone, V: Clone> Clone for CodecMap<C, V>
where
    C::Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            codec: self.codec.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<C: KeyCodec, V: fmt::Debug> fmt::Debug for CodecMap<C, V>
where
    C::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<C: KeyCodec, V> Extend<(C::Item, V)> for CodecMap<C, V> {
    fn extend<I: IntoIterator<Item = (C::Item, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CodecMap<Identity<K>, V>
where
    Identity<K>: KeyCodec<Item = K, Key = K>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
