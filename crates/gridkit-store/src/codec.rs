//! The encode/decode contract between a value and its hash key.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Maps values to hashable keys and back.
///
/// `decode(encode(x))` must equal `x` for every value actually stored,
/// restricted to whatever fields the caller considers identity. Collisions
/// are not detected: two values that encode alike share one entry.
pub trait KeyCodec {
    /// The value type callers work with.
    type Item;
    /// The stored, hashed form.
    type Key: Hash + Eq;

    /// Project a value onto its key.
    fn encode(&self, item: &Self::Item) -> Self::Key;

    /// Rebuild a value from its key.
    fn decode(&self, key: &Self::Key) -> Self::Item;
}

/// Codec for types that are already `Hash + Eq`: the key is the value.
pub struct Identity<T>(PhantomData<fn() -> T>);

impl<T> Identity<T> {
    /// Create the identity codec.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T: Hash + Eq + Clone> KeyCodec for Identity<T> {
    type Item = T;
    type Key = T;

    fn encode(&self, item: &T) -> T {
        item.clone()
    }

    fn decode(&self, key: &T) -> T {
        key.clone()
    }
}

/// Codec built from a pair of closures.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Direction, Point2};
/// use gridkit_store::{CodecSet, FnCodec};
///
/// // Pack a position and heading into a single integer key.
/// let codec = FnCodec::new(
///     |&(p, d): &(Point2, Direction)| (p.x << 20 | p.y) << 2 | d as i64,
///     |&k: &i64| {
///         let d = Direction::ALL[(k & 3) as usize];
///         let xy = k >> 2;
///         (Point2::new(xy >> 20, xy & 0xFFFFF), d)
///     },
/// );
/// let mut seen = CodecSet::with_codec(codec);
/// assert!(seen.insert((Point2::new(3, 4), Direction::Left)));
/// assert!(!seen.insert((Point2::new(3, 4), Direction::Left)));
/// assert_eq!(seen.iter().next(), Some((Point2::new(3, 4), Direction::Left)));
/// ```
pub struct FnCodec<T, K, E, D> {
    encode: E,
    decode: D,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, E, D> FnCodec<T, K, E, D>
where
    E: Fn(&T) -> K,
    D: Fn(&K) -> T,
{
    /// Wrap an encoder and its inverse.
    pub fn new(encode: E, decode: D) -> Self {
        Self {
            encode,
            decode,
            _marker: PhantomData,
        }
    }
}

impl<T, K, E: Clone, D: Clone> Clone for FnCodec<T, K, E, D> {
    fn clone(&self) -> Self {
        Self {
            encode: self.encode.clone(),
            decode: self.decode.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, K, E, D> fmt::Debug for FnCodec<T, K, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCodec")
    }
}

impl<T, K, E, D> KeyCodec for FnCodec<T, K, E, D>
where
    K: Hash + Eq,
    E: Fn(&T) -> K,
    D: Fn(&K) -> T,
{
    type Item = T;
    type Key = K;

    fn encode(&self, item: &T) -> K {
        (self.encode)(item)
    }

    fn decode(&self, key: &K) -> T {
        (self.decode)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::Point2;
    use proptest::prelude::*;

    fn string_codec() -> impl KeyCodec<Item = Point2, Key = String> {
        FnCodec::new(
            |p: &Point2| format!("{},{}", p.x, p.y),
            |s: &String| {
                let (x, y) = s.split_once(',').unwrap_or(("0", "0"));
                Point2::new(x.parse().unwrap_or(0), y.parse().unwrap_or(0))
            },
        )
    }

    #[test]
    fn identity_round_trips() {
        let codec = Identity::<(i32, char)>::new();
        assert_eq!(codec.decode(&codec.encode(&(7, 'x'))), (7, 'x'));
    }

    proptest! {
        #[test]
        fn string_codec_round_trips(x in -10_000i64..10_000, y in -10_000i64..10_000) {
            let codec = string_codec();
            let p = Point2::new(x, y);
            prop_assert_eq!(codec.decode(&codec.encode(&p)), p);
        }
    }
}
