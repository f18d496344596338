//! Thread-safe double-ended queue adapter and its index arithmetic.

#[cfg(test)]
mod tests;

use core::hash::{Hash, Hasher};
use core::ops::Range;
use std::collections::{vec_deque, VecDeque};

use crate::sync::{Guarded, RwLockLike};

/// Trap-free index arithmetic for [`ConcurrentDeque`].
///
/// These helpers mirror standard sequence-index semantics: they never
/// bounds-check or trap, so an out-of-range result is legal to compute.
/// Every element access performed with such an index is validated by the
/// deque itself, where an out-of-range index degrades to `None` or a no-op.
/// Underflow wraps to a huge `usize`, which fails those same bounds checks.
pub mod index {
  /// Index immediately after `i`.
  #[must_use]
  pub const fn after(i: usize) -> usize {
    i.wrapping_add(1)
  }

  /// Index immediately before `i`.
  #[must_use]
  pub const fn before(i: usize) -> usize {
    i.wrapping_sub(1)
  }

  /// Index at signed `distance` from `i`.
  #[must_use]
  pub const fn offset_by(i: usize, distance: isize) -> usize {
    i.wrapping_add_signed(distance)
  }

  /// Index at signed `dist` from `i`, limited by `limit`.
  ///
  /// Returns `None` when stepping from `i` by `dist` would pass `limit`
  /// (in either direction of travel).
  #[must_use]
  pub fn offset_by_limited(i: usize, dist: isize, limit: usize) -> Option<usize> {
    let gap = distance(i, limit);
    let passes_limit = if dist > 0 { gap >= 0 && gap < dist } else { gap <= 0 && dist < gap };
    if passes_limit {
      None
    } else {
      Some(offset_by(i, dist))
    }
  }

  /// Signed distance from `start` to `end`.
  #[must_use]
  pub const fn distance(start: usize, end: usize) -> isize {
    (end as isize).wrapping_sub(start as isize)
  }
}

/// Thread-safe double-ended queue.
///
/// Wraps a `VecDeque<T>` behind a reader-writer lock, adding random access
/// by index, insertion and removal at arbitrary positions, and O(1)
/// amortised operations at both ends. Every operation acquires the lock
/// internally, so a shared reference is enough to mutate.
///
/// Out-of-range element accesses degrade to `None` or no-ops. An insertion
/// index at or beyond the end is treated as "insert at the end": see
/// [`ConcurrentDeque::insert_at`]. Removal counts are clamped to the number
/// of elements actually present.
///
/// Iteration works over a snapshot: [`ConcurrentDeque::iter`] copies the
/// contents under the read lock and the returned iterator owns the copy, so
/// later mutation of the live deque does not affect it and the lock is not
/// held while iterating.
pub struct ConcurrentDeque<T, L = spin::RwLock<VecDeque<T>>>
where
  L: RwLockLike<VecDeque<T>>, {
  data: Guarded<VecDeque<T>, L>,
}

impl<T, L> ConcurrentDeque<T, L>
where
  L: RwLockLike<VecDeque<T>>,
{
  /// Creates an empty deque.
  #[must_use]
  pub fn new() -> Self {
    Self { data: Guarded::new(VecDeque::new()) }
  }

  /// Creates an empty deque with at least the given capacity.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Guarded::new(VecDeque::with_capacity(capacity)) }
  }

  /// Acquires shared access and applies `op` to the raw storage.
  pub fn with_read<R>(&self, op: impl FnOnce(&VecDeque<T>) -> R) -> R {
    self.data.with_read(op)
  }

  /// Acquires exclusive access and applies `op` to the raw storage.
  pub fn with_write<R>(&self, op: impl FnOnce(&mut VecDeque<T>) -> R) -> R {
    self.data.with_write(op)
  }

  /// Number of elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.with_read(VecDeque::len)
  }

  /// Whether the deque holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.with_read(VecDeque::is_empty)
  }

  /// The range of valid indices at this instant.
  #[must_use]
  pub fn indices(&self) -> Range<usize> {
    0..self.len()
  }

  /// Appends an element at the back.
  pub fn append(&self, value: T) {
    self.data.with_write(|items| items.push_back(value));
  }

  /// Appends every element yielded by `values` at the back.
  pub fn append_all(&self, values: impl IntoIterator<Item = T>) {
    self.data.with_write(|items| items.extend(values));
  }

  /// Inserts an element at the front.
  pub fn prepend(&self, value: T) {
    self.data.with_write(|items| items.push_front(value));
  }

  /// Inserts the elements of `values` at the front, preserving their order.
  pub fn prepend_all(&self, values: impl IntoIterator<Item = T>) {
    // Pushing back to front keeps each step O(1) amortised, where a
    // positional insert would shift the incoming prefix on every step.
    let mut incoming: Vec<T> = values.into_iter().collect();
    self.data.with_write(|items| {
      while let Some(value) = incoming.pop() {
        items.push_front(value);
      }
    });
  }

  /// Inserts `value` at `index`, shifting later elements back.
  ///
  /// An index at or beyond the current end appends instead. This
  /// clamp-to-append policy is deliberate: callers racing with concurrent
  /// removals cannot guarantee an index stays in range, and losing the
  /// element would be worse than placing it at the end.
  pub fn insert_at(&self, value: T, index: usize) {
    self.data.with_write(|items| {
      if index < items.len() {
        items.insert(index, value);
      } else {
        items.push_back(value);
      }
    });
  }

  /// Inserts every element of `values` starting at `index`, with the same
  /// clamp-to-append policy as [`ConcurrentDeque::insert_at`].
  pub fn insert_all_at(&self, values: impl IntoIterator<Item = T>, index: usize) {
    self.data.with_write(|items| {
      if index < items.len() {
        for (offset, value) in values.into_iter().enumerate() {
          items.insert(index + offset, value);
        }
      } else {
        items.extend(values);
      }
    });
  }

  /// Removes and returns the element at `index`, or `None` when out of range.
  pub fn remove_at(&self, index: usize) -> Option<T> {
    self.data.with_write(|items| items.remove(index))
  }

  /// Removes the elements in `range` when the range is valid against the
  /// current length (`start <= end` and `end < len`); otherwise a no-op.
  pub fn remove_subrange(&self, range: Range<usize>) {
    self.data.with_write(|items| {
      if range.start <= range.end && range.end < items.len() {
        items.drain(range);
      }
    });
  }

  /// Removes and returns the first element, or `None` when empty.
  pub fn pop_first(&self) -> Option<T> {
    self.data.with_write(VecDeque::pop_front)
  }

  /// Removes and returns the first element, or `None` when empty.
  pub fn remove_first(&self) -> Option<T> {
    self.pop_first()
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
    self.data.with_write(VecDeque::pop_back)
  }

  /// Removes the last `n` elements, clamped to the current length.
  pub fn remove_last_n(&self, n: usize) {
    self.data.with_write(|items| {
      let remaining = items.len() - n.min(items.len());
      items.truncate(remaining);
    });
  }

  /// Removes every element matching `predicate`, preserving the relative
  /// order of the survivors.
  pub fn remove_where(&self, mut predicate: impl FnMut(&T) -> bool) {
    self.data.with_write(|items| items.retain(|item| !predicate(item)));
  }

  /// Removes all elements. Allocated capacity is retained.
  pub fn clear(&self) {
    self.data.with_write(VecDeque::clear);
  }

  /// Swaps the elements at `i` and `j`; no-op unless both are in range.
  pub fn swap_at(&self, i: usize, j: usize) {
    self.data.with_write(|items| {
      if i < items.len() && j < items.len() {
        items.swap(i, j);
      }
    });
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

impl<T, L> ConcurrentDeque<T, L>
where
  T: Clone,
  L: RwLockLike<VecDeque<T>>,
{
  /// Copies out the whole deque at this instant.
  #[must_use]
  pub fn snapshot(&self) -> VecDeque<T> {
    self.data.with_read(Clone::clone)
  }

  /// Copies out all elements front to back.
  #[must_use]
  pub fn values(&self) -> Vec<T> {
    self.data.with_read(|items| items.iter().cloned().collect())
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

  /// Returns an owning iterator over a snapshot of the contents.
  ///
  /// The copy is taken under the read lock; mutation of the live deque after
  /// this call does not affect the iterator.
  #[must_use]
  pub fn iter(&self) -> vec_deque::IntoIter<T> {
    self.snapshot().into_iter()
  }
}

impl<'a, T, L> IntoIterator for &'a ConcurrentDeque<T, L>
where
  T: Clone,
  L: RwLockLike<VecDeque<T>>,
{
  type IntoIter = vec_deque::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T, L> Default for ConcurrentDeque<T, L>
where
  L: RwLockLike<VecDeque<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, L> From<VecDeque<T>> for ConcurrentDeque<T, L>
where
  L: RwLockLike<VecDeque<T>>,
{
  fn from(items: VecDeque<T>) -> Self {
    Self { data: Guarded::new(items) }
  }
}

impl<T, L> From<Vec<T>> for ConcurrentDeque<T, L>
where
  L: RwLockLike<VecDeque<T>>,
{
  fn from(items: Vec<T>) -> Self {
    Self { data: Guarded::new(VecDeque::from(items)) }
  }
}

// Compares read-locked contents, not identity. Comparing two distinct deques
// takes both read locks in argument order; callers comparing the same pair
// from two threads in opposite orders are subject to the usual lock-ordering
// caveat.
impl<T, L> PartialEq for ConcurrentDeque<T, L>
where
  T: PartialEq,
  L: RwLockLike<VecDeque<T>>,
{
  fn eq(&self, other: &Self) -> bool {
    if core::ptr::eq(self, other) {
      return true;
    }
    self.data.with_read(|left| other.data.with_read(|right| left == right))
  }
}

impl<T, L> Eq for ConcurrentDeque<T, L>
where
  T: Eq,
  L: RwLockLike<VecDeque<T>>,
{
}

impl<T, L> Hash for ConcurrentDeque<T, L>
where
  T: Hash,
  L: RwLockLike<VecDeque<T>>,
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.data.with_read(|items| items.hash(state));
  }
}

impl<T, L> core::fmt::Debug for ConcurrentDeque<T, L>
where
  T: core::fmt::Debug,
  L: RwLockLike<VecDeque<T>>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.data.with_read(|items| f.debug_list().entries(items).finish())
  }
}
