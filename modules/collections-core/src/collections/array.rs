//! Thread-safe growable array adapter.


use crate::sync::{Guarded, RwLockLike};

/// Thread-safe growable array.
///
/// Wraps a `Vec<T>` behind a reader-writer lock. Every operation acquires
/// the lock internally, so a shared reference is enough to mutate. Reads
/// return clones or derived scalars, never references into the guarded
/// storage.
///
/// Out-of-range indices are not errors: reads return `None` and writes are
/// no-ops, leaving the array unchanged.
pub struct ConcurrentArray<T, L = spin::RwLock<Vec<T>>>
where
  L: RwLockLike<Vec<T>>, {
  data: Guarded<Vec<T>, L>,
}

impl<T, L> ConcurrentArray<T, L>
where
  L: RwLockLike<Vec<T>>,
{
  /// Creates an empty array.
  #[must_use]
  pub fn new() -> Self {
    Self { data: Guarded::new(Vec::new()) }
  }

  /// Creates an empty array with at least the given capacity.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Guarded::new(Vec::with_capacity(capacity)) }
  }

  /// Acquires shared access and applies `op` to the raw storage.
  pub fn with_read<R>(&self, op: impl FnOnce(&Vec<T>) -> R) -> R {
    self.data.with_read(op)
  }

  /// Acquires exclusive access and applies `op` to the raw storage.
  pub fn with_write<R>(&self, op: impl FnOnce(&mut Vec<T>) -> R) -> R {
    self.data.with_write(op)
  }

  /// Number of elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.with_read(Vec::len)
  }

  /// Whether the array holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.with_read(Vec::is_empty)
  }

  /// Appends an element.
  pub fn push(&self, value: T) {
    self.data.with_write(|items| items.push(value));
  }

  /// Appends every element yielded by `values`.
  pub fn extend(&self, values: impl IntoIterator<Item = T>) {
    self.data.with_write(|items| items.extend(values));
  }

  /// Removes and returns the element at `index`, or `None` when out of range.
  pub fn remove_at(&self, index: usize) -> Option<T> {
    self.data.with_write(|items| {
      if index < items.len() {
        Some(items.remove(index))
      } else {
        None
      }
    })
  }

  /// Removes every element matching `predicate`, preserving the relative
  /// order of the survivors.
  pub fn remove_where(&self, mut predicate: impl FnMut(&T) -> bool) {
    self.data.with_write(|items| items.retain(|item| !predicate(item)));
  }

  /// Removes and returns the first element, or `None` when empty.
  pub fn remove_first(&self) -> Option<T> {
    self.data.with_write(|items| {
      if items.is_empty() {
        None
      } else {
        Some(items.remove(0))
      }
    })
  }

  /// Removes the first `n` elements, clamped to the current length.
  pub fn remove_first_n(&self, n: usize) {
    self.data.with_write(|items| {
      let n = n.min(items.len());
      items.drain(..n);
    });
  }

  /// Removes and returns the last element, or `None` when empty.
  pub fn remove_last(&self) -> Option<T> {
    self.data.with_write(Vec::pop)
  }

  /// Removes all elements. Allocated capacity is retained.
  pub fn clear(&self) {
    self.data.with_write(Vec::clear);
  }

  /// Overwrites the element at `index`; no-op when out of range.
  pub fn set(&self, index: usize, value: T) {
    self.data.with_write(|items| {
      if let Some(slot) = items.get_mut(index) {
        *slot = value;
      }
    });
  }

  /// Applies `mutation` to the element at `index` under a single write
  /// acquisition. Returns whether the element existed.
  ///
  /// This is an atomic read-modify-write: composing [`ConcurrentArray::get`]
  /// and [`ConcurrentArray::set`] from outside would let another writer slip
  /// between the two acquisitions.
  pub fn mutate_at(&self, index: usize, mutation: impl FnOnce(&mut T)) -> bool {
    self.data.with_write(|items| match items.get_mut(index) {
      | Some(slot) => {
        mutation(slot);
        true
      },
      | None => false,
    })
  }
}

impl<T, L> ConcurrentArray<T, L>
where
  T: Clone,
  L: RwLockLike<Vec<T>>,
{
  /// Copies out all elements.
  #[must_use]
  pub fn values(&self) -> Vec<T> {
    self.data.with_read(Clone::clone)
  }

  /// Returns a clone of the element at `index`, or `None` when out of range.
  #[must_use]
  pub fn get(&self, index: usize) -> Option<T> {
    self.data.with_read(|items| items.get(index).cloned())
  }

  /// Returns a clone of the first element matching `predicate`.
  ///
  /// Scans under the read lock and short-circuits on the first match.
  pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
    self.data.with_read(|items| items.iter().find(|&item| predicate(item)).cloned())
  }
}

impl<T, L> Default for ConcurrentArray<T, L>
where
  L: RwLockLike<Vec<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, L> From<Vec<T>> for ConcurrentArray<T, L>
where
  L: RwLockLike<Vec<T>>,
{
  fn from(items: Vec<T>) -> Self {
    Self { data: Guarded::new(items) }
  }
}

impl<T, L> core::fmt::Debug for ConcurrentArray<T, L>
where
  T: core::fmt::Debug,
  L: RwLockLike<Vec<T>>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.data.with_read(|items| f.debug_list().entries(items).finish())
  }
}
