//! Ready-made aliases binding the core adapters to the OS lock backend.


use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use concurrent_collections_core_rs::{ConcurrentArray, ConcurrentDeque, ConcurrentHashMap, ConcurrentOrderedMap};
use indexmap::IndexMap;

use crate::sync::StdRwLock;

/// Growable array backed by [`StdRwLock`].
pub type StdArray<T> = ConcurrentArray<T, StdRwLock<Vec<T>>>;
/// Double-ended queue backed by [`StdRwLock`].
pub type StdDeque<T> = ConcurrentDeque<T, StdRwLock<VecDeque<T>>>;
/// Hash map backed by [`StdRwLock`].
pub type StdHashMap<K, V> = ConcurrentHashMap<K, V, StdRwLock<HashMap<K, V>>>;
/// Insertion-ordered map backed by [`StdRwLock`].
pub type StdOrderedMap<K, V> = ConcurrentOrderedMap<K, V, StdRwLock<IndexMap<K, V>>>;

/// Clonable shared handle to a [`StdArray`].
pub type ArcArray<T> = Arc<StdArray<T>>;
/// Clonable shared handle to a [`StdDeque`].
pub type ArcDeque<T> = Arc<StdDeque<T>>;
/// Clonable shared handle to a [`StdHashMap`].
pub type ArcHashMap<K, V> = Arc<StdHashMap<K, V>>;
/// Clonable shared handle to a [`StdOrderedMap`].
pub type ArcOrderedMap<K, V> = Arc<StdOrderedMap<K, V>>;

/// Constructs an empty [`ArcArray`].
#[must_use]
pub fn make_arc_array<T>() -> ArcArray<T> {
  Arc::new(StdArray::new())
}

/// Constructs an empty [`ArcDeque`].
#[must_use]
pub fn make_arc_deque<T>() -> ArcDeque<T> {
  Arc::new(StdDeque::new())
}

/// Constructs an empty [`ArcHashMap`].
#[must_use]
pub fn make_arc_hash_map<K, V>() -> ArcHashMap<K, V> {
  Arc::new(StdHashMap::new())
}

/// Constructs an empty [`ArcOrderedMap`].
#[must_use]
pub fn make_arc_ordered_map<K, V>() -> ArcOrderedMap<K, V> {
  Arc::new(StdOrderedMap::new())
}
