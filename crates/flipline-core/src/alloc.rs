//! Hash collections backed by AHash.
//!
//! Position caches and per-item animation state are keyed by item id and
//! rebuilt every frame, so the faster hasher pays off.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
