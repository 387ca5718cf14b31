//! Hash map alias for id-keyed lookups.
//!
//! With the `fx-hash` feature the hasher is `rustc_hash::FxBuildHasher`;
//! otherwise the std `RandomState` (SipHash).  Iteration order of the map
//! is never relied upon for anything that affects simulation results.

#[cfg(feature = "fx-hash")]
pub type IdMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(feature = "fx-hash"))]
pub type IdMap<K, V> = std::collections::HashMap<K, V>;
