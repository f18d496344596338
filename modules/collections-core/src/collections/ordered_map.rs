//! Thread-safe insertion-ordered map adapter.


use core::hash::Hash;

use indexmap::IndexMap;

use crate::collections::map_ops::MapOps;
use crate::sync::{Guarded, RwLockLike};

/// Thread-safe insertion-ordered map.
///
/// Wraps an `IndexMap<K, V>` behind a reader-writer lock. The key order is
/// a gap-free permutation of the key set: keys appear in insertion order,
/// removal shifts later entries forward, and [`ConcurrentOrderedMap::move_index`]
/// / [`ConcurrentOrderedMap::move_key`] reposition a single entry while
/// preserving the relative order of all others. Re-inserting an existing key
/// updates its value in place without changing its position.
///
/// `keys()` and `values()` from the [`MapOps`] impl return entries in the
/// maintained order, not hash order.
pub struct ConcurrentOrderedMap<K, V, L = spin::RwLock<IndexMap<K, V>>>
where
  L: RwLockLike<IndexMap<K, V>>, {
  data: Guarded<IndexMap<K, V>, L>,
}

impl<K, V, L> ConcurrentOrderedMap<K, V, L>
where
  L: RwLockLike<IndexMap<K, V>>,
{
  /// Creates an empty map.
  #[must_use]
  pub fn new() -> Self {
    Self { data: Guarded::new(IndexMap::new()) }
  }

  /// Creates an empty map with at least the given capacity.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Guarded::new(IndexMap::with_capacity(capacity)) }
  }

  /// Acquires shared access and applies `op` to the raw storage.
  pub fn with_read<R>(&self, op: impl FnOnce(&IndexMap<K, V>) -> R) -> R {
    self.data.with_read(op)
  }

  /// Acquires exclusive access and applies `op` to the raw storage.
  pub fn with_write<R>(&self, op: impl FnOnce(&mut IndexMap<K, V>) -> R) -> R {
    self.data.with_write(op)
  }
}

impl<K, V, L> ConcurrentOrderedMap<K, V, L>
where
  K: Eq + Hash + Clone,
  L: RwLockLike<IndexMap<K, V>>,
{
  /// Relocates the entry at position `from` to position `to`, shifting the
  /// entries in between. Lookup, removal, and reinsertion happen under one
  /// write acquisition.
  ///
  /// Returns `false` without mutating when either position is out of range.
  /// `from == to` is a successful no-op and returns `true`.
  pub fn move_index(&self, from: usize, to: usize) -> bool {
    if from == to {
      return true;
    }
    self.data.with_write(|entries| {
      if from < entries.len() && to < entries.len() {
        if let Some((key, value)) = entries.shift_remove_index(from) {
          entries.shift_insert(to, key, value);
          return true;
        }
      }
      false
    })
  }

  /// Relocates the entry for `key` to position `to`, shifting the entries in
  /// between. `to` is validated against the entry count before removal.
  ///
  /// Returns `false` without mutating when the key is absent or `to` is out
  /// of range.
  pub fn move_key(&self, key: &K, to: usize) -> bool {
    self.data.with_write(|entries| {
      if to < entries.len() {
        if let Some(value) = entries.shift_remove(key) {
          entries.shift_insert(to, key.clone(), value);
          return true;
        }
      }
      false
    })
  }
}

impl<K, V, L> MapOps<K, V> for ConcurrentOrderedMap<K, V, L>
where
  K: Eq + Hash + Clone,
  V: Clone,
  L: RwLockLike<IndexMap<K, V>>,
{
  fn len(&self) -> usize {
    self.data.with_read(IndexMap::len)
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
        entries.shift_remove(&key);
      },
    });
  }

  // Removal must keep the order of the surviving entries gap-free, so this
  // is shift_remove, not the cheaper swap_remove.
  fn remove(&self, key: &K) -> Option<V> {
    self.data.with_write(|entries| entries.shift_remove(key))
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
        entries.shift_remove(&key);
      }
    });
  }

  fn clear(&self) {
    self.data.with_write(IndexMap::clear);
  }
}

impl<K, V, L> Default for ConcurrentOrderedMap<K, V, L>
where
  L: RwLockLike<IndexMap<K, V>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V, L> From<IndexMap<K, V>> for ConcurrentOrderedMap<K, V, L>
where
  L: RwLockLike<IndexMap<K, V>>,
{
  fn from(entries: IndexMap<K, V>) -> Self {
    Self { data: Guarded::new(entries) }
  }
}

impl<K, V, L> core::fmt::Debug for ConcurrentOrderedMap<K, V, L>
where
  K: core::fmt::Debug,
  V: core::fmt::Debug,
  L: RwLockLike<IndexMap<K, V>>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.data.with_read(|entries| f.debug_map().entries(entries.iter()).finish())
  }
}
