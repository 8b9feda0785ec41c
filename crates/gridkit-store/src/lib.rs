//! Structurally-keyed hash containers.
//!
//! Every container here is keyed by a `Hash + Eq` value and iterates in
//! insertion order (backed by [`indexmap`]). Keys that are not themselves a
//! good hash key go through a [`KeyCodec`]: the container stores the
//! encoded form and decodes on iteration. Two items that encode to the
//! same key are the same entry; the codec must be faithful for every field
//! the caller cares about.
//!
//! - [`CodecSet`] / [`StructSet`]: hash set over encoded keys.
//! - [`CodecMap`] / [`StructMap`]: hash map over encoded keys.
//! - [`DefaultMap`]: map that materializes missing values from a factory.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod default_map;
pub mod map;
pub mod set;

pub use codec::{FnCodec, Identity, KeyCodec};
pub use default_map::DefaultMap;
pub use map::{CodecMap, StructMap};
pub use set::{CodecSet, StructSet};
