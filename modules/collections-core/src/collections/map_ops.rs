//! Capability trait shared by the map adapters.

use core::hash::Hash;

/// Capability contract for a thread-safe key-value store.
///
/// [`ConcurrentHashMap`](crate::collections::ConcurrentHashMap) and
/// [`ConcurrentOrderedMap`](crate::collections::ConcurrentOrderedMap) both
/// satisfy it, so callers that only need map semantics can be generic over
/// either; the ordered variant additionally exposes its reposition
/// operations as inherent methods.
///
/// Absent keys are never fatal: reads return `None` and writes degrade to
/// no-ops. Every bulk accessor returns an independent copy taken under the
/// read lock.
pub trait MapOps<K, V>
where
  K: Eq + Hash + Clone,
  V: Clone, {
  /// Number of entries.
  fn len(&self) -> usize;

  /// Whether the map holds no entries.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Copies out all keys.
  fn keys(&self) -> Vec<K>;

  /// Copies out all values.
  fn values(&self) -> Vec<V>;

  /// Whether a value is set for `key`.
  fn contains_key(&self, key: &K) -> bool;

  /// Whether any entry matches `predicate`. Short-circuits on the first
  /// match, scanning under the read lock.
  fn contains_where(&self, predicate: impl FnMut(&K, &V) -> bool) -> bool;

  /// Returns a clone of the value for `key`, or `None` when absent.
  fn get(&self, key: &K) -> Option<V>;

  /// Sets the value for `key`, returning the prior value if any.
  fn insert(&self, key: K, value: V) -> Option<V>;

  /// Sets or removes the value for `key`: `Some(v)` inserts, `None` removes
  /// the key. The double duty of "set to empty means delete" is part of the
  /// contract, distinct from [`MapOps::remove`].
  fn set(&self, key: K, value: Option<V>);

  /// Removes the entry for `key`, returning its prior value if present.
  fn remove(&self, key: &K) -> Option<V>;

  /// Applies `mutation` to the value for `key` under a single write
  /// acquisition. Returns whether the key was present; absent keys are a
  /// no-op.
  fn mutate(&self, key: &K, mutation: impl FnOnce(&mut V)) -> bool;

  /// Removes every entry matching `predicate`.
  ///
  /// The matching keys are collected in one pass and removed afterwards, so
  /// the predicate never observes a map it is mutating.
  fn remove_where(&self, predicate: impl FnMut(&K, &V) -> bool);

  /// Removes all entries. Allocated capacity is retained.
  fn clear(&self);
}
