//! Thread-safe hash map adapter.


use core::hash::Hash;
use std::collections::HashMap;

use crate::collections::map_ops::MapOps;
use crate::sync::{Guarded, RwLockLike};

/// Thread-safe hash map.
///
/// Wraps a `HashMap<K, V>` behind a reader-writer lock. All map semantics
/// live in the [`MapOps`] impl; this type only adds construction and raw
/// guarded access. Iteration order is the hash order and is unspecified; use
/// [`ConcurrentOrderedMap`](crate::collections::ConcurrentOrderedMap) when
/// insertion order matters.
pub struct ConcurrentHashMap<K, V, L = spin::RwLock<HashMap<K, V>>>
where
  L: RwLockLike<HashMap<K, V>>, {
  data: Guarded<HashMap<K, V>, L>,
}

impl<K, V, L> ConcurrentHashMap<K, V, L>
where
  L: RwLockLike<HashMap<K, V>>,
{
  /// Creates an empty map.
  #[must_use]
  pub fn new() -> Self {
    Self { data: Guarded::new(HashMap::new()) }
  }

  /// Creates an empty map with at least the given capacity.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Guarded::new(HashMap::with_capacity(capacity)) }
  }

  /// Acquires shared access and applies `op` to the raw storage.
  pub fn with_read<R>(&self, op: impl FnOnce(&HashMap<K, V>) -> R) -> R {
    self.data.with_read(op)
  }

  /// Acquires exclusive access and applies `op` to the raw storage.
  pub fn with_write<R>(&self, op: impl FnOnce(&mut HashMap<K, V>) -> R) -> R {
    self.data.with_write(op)
  }
}

impl<K, V, L> MapOps<K, V> for ConcurrentHashMap<K, V, L>
where
  K: Eq + Hash + Clone,
  V: Clone,
  L: RwLockLike<HashMap<K, V>>,
{
  fn len(&self) -> usize {
    self.data.with_read(HashMap::len)
  }

  fn keys(&self) -> Vec<K> {
    self.data.with_read(|entries| entries.keys().cloned().collect())
  }

  fn values(&self) -> Vec<V> {
    self.data.with_read(|entries| entries.values().cloned().collect())
  }

  fn contains_key(&self, key: &K) -> bool {
    self.data.with_read(|entries| entries.contains_key(key))
  }

  fn contains_where(&self, mut predicate: impl FnMut(&K, &V) -> bool) -> bool {
    self.data.with_read(|entries| entries.iter().any(|(key, value)| predicate(key, value)))
  }

  fn get(&self, key: &K) -> Option<V> {
    self.data.with_read(|entries| entries.get(key).cloned())
  }

  fn insert(&self, key: K, value: V) -> Option<V> {
    self.data.with_write(|entries| entries.insert(key, value))
  }

  fn set(&self, key: K, value: Option<V>) {
    self.data.with_write(|entries| match value {
      | Some(value) => {
        entries.insert(key, value);
      },
      | None => {
        entries.remove(&key);
      },
    });
  }

  fn remove(&self, key: &K) -> Option<V> {
    self.data.with_write(|entries| entries.remove(key))
  }

  fn mutate(&self, key: &K, mutation: impl FnOnce(&mut V)) -> bool {
    self.data.with_write(|entries| match entries.get_mut(key) {
      | Some(value) => {
        mutation(value);
        true
      },
      | None => false,
    })
  }

  fn remove_where(&self, mut predicate: impl FnMut(&K, &V) -> bool) {
    self.data.with_write(|entries| {
      let doomed: Vec<K> = entries
        .iter()
        .filter(|&(key, value)| predicate(key, value))
        .map(|(key, _)| key.clone())
        .collect();
      for key in doomed {
        entries.remove(&key);
      }
    });
  }

  fn clear(&self) {
    self.data.with_write(HashMap::clear);
  }
}

impl<K, V, L> Default for ConcurrentHashMap<K, V, L>
where
  L: RwLockLike<HashMap<K, V>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V, L> From<HashMap<K, V>> for ConcurrentHashMap<K, V, L>
where
  L: RwLockLike<HashMap<K, V>>,
{
  fn from(entries: HashMap<K, V>) -> Self {
    Self { data: Guarded::new(entries) }
  }
}

impl<K, V, L> core::fmt::Debug for ConcurrentHashMap<K, V, L>
where
  K: core::fmt::Debug,
  V: core::fmt::Debug,
  L: RwLockLike<HashMap<K, V>>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.data.with_read(|entries| f.debug_map().entries(entries.iter()).finish())
  }
}
