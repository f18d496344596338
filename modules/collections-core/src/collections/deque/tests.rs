use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use super::{index, ConcurrentDeque};

#[test]
fn ends_grow_in_both_directions() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::new();
  deque.append(1);
  deque.append(2);
  deque.prepend(0);

  assert_eq!(deque.values(), vec![0, 1, 2]);

  // Out-of-range removal is a no-op returning nothing.
  assert_eq!(deque.remove_at(5), None);
  assert_eq!(deque.values(), vec![0, 1, 2]);

  // An insertion index beyond the end appends.
  deque.insert_at(9, 10);
  assert_eq!(deque.values(), vec![0, 1, 2, 9]);
}

#[test]
fn insert_at_within_bounds_shifts() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![0, 2]);
  deque.insert_at(1, 1);
  assert_eq!(deque.values(), vec![0, 1, 2]);
}

#[test]
fn insert_all_at_clamps_to_append() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![0, 3]);

  deque.insert_all_at([1, 2], 1);
  assert_eq!(deque.values(), vec![0, 1, 2, 3]);

  deque.insert_all_at([4, 5], 100);
  assert_eq!(deque.values(), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn prepend_all_preserves_order() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![3, 4]);
  deque.prepend_all([1, 2]);
  assert_eq!(deque.values(), vec![1, 2, 3, 4]);
}

#[test]
fn prepend_all_front_loads_large_batches_in_order() {
  let deque: ConcurrentDeque<usize> = ConcurrentDeque::from(vec![998, 999]);

  deque.prepend_all(0..998);
  assert_eq!(deque.len(), 1000);
  assert_eq!(deque.values(), (0..1000).collect::<Vec<_>>());

  deque.prepend_all(std::iter::empty());
  assert_eq!(deque.len(), 1000);
}

#[test]
fn remove_subrange_requires_valid_bounds() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![0, 1, 2, 3, 4]);

  // end >= len is invalid and leaves the deque untouched.
  deque.remove_subrange(2..5);
  assert_eq!(deque.values(), vec![0, 1, 2, 3, 4]);

  deque.remove_subrange(1..3);
  assert_eq!(deque.values(), vec![0, 3, 4]);
}

#[test]
fn removal_counts_clamp_to_len() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  deque.remove_first_n(10);
  assert!(deque.is_empty());

  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  deque.remove_last_n(10);
  assert!(deque.is_empty());

  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3, 4]);
  deque.remove_first_n(1);
  deque.remove_last_n(2);
  assert_eq!(deque.values(), vec![2]);
}

#[test]
fn pop_and_remove_at_ends() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  assert_eq!(deque.pop_first(), Some(1));
  assert_eq!(deque.remove_first(), Some(2));
  assert_eq!(deque.remove_last(), Some(3));
  assert_eq!(deque.remove_last(), None);
  assert_eq!(deque.pop_first(), None);
}

#[test]
fn swap_at_ignores_invalid_indices() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);

  deque.swap_at(0, 2);
  assert_eq!(deque.values(), vec![3, 2, 1]);

  deque.swap_at(0, 3);
  deque.swap_at(7, 1);
  assert_eq!(deque.values(), vec![3, 2, 1]);
}

#[test]
fn set_and_mutate_validate_bounds() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2]);

  deque.set(1, 5);
  deque.set(9, 9);
  assert_eq!(deque.values(), vec![1, 5]);

  assert!(deque.mutate_at(0, |value| *value *= 10));
  assert!(!deque.mutate_at(2, |value| *value *= 10));
  assert_eq!(deque.values(), vec![10, 5]);
}

#[test]
fn iteration_works_over_a_snapshot() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);

  let iter = deque.iter();
  deque.append(4);
  deque.remove_first();

  // The iterator still sees the contents from when it was taken.
  assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!(deque.values(), vec![2, 3, 4]);

  let via_ref: Vec<i32> = (&deque).into_iter().collect();
  assert_eq!(via_ref, vec![2, 3, 4]);
}

#[test]
fn equality_and_hash_compare_contents() {
  let left: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  let right: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  let other: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2]);

  assert_eq!(left, right);
  assert_ne!(left, other);

  // Self-comparison short-circuits on identity instead of re-taking the lock.
  let alias = &left;
  assert!(*alias == left);

  let hash_of = |deque: &ConcurrentDeque<i32>| {
    let mut hasher = DefaultHasher::new();
    deque.hash(&mut hasher);
    hasher.finish()
  };
  assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn find_scans_front_to_back() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![4, 5, 6]);
  assert_eq!(deque.find(|value| value % 2 == 1), Some(5));
  assert_eq!(deque.find(|value| *value > 10), None);
}

#[test]
fn remove_where_keeps_survivor_order() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3, 4, 5]);
  deque.remove_where(|value| value % 2 == 1);
  assert_eq!(deque.values(), vec![2, 4]);
}

#[test]
fn indices_reflect_current_count() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![7, 8]);
  assert_eq!(deque.indices(), 0..2);
  deque.clear();
  assert_eq!(deque.indices(), 0..0);
}

#[test]
fn snapshot_is_independent() {
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2]);
  let copy: VecDeque<i32> = deque.snapshot();
  deque.append(3);
  assert_eq!(copy, VecDeque::from(vec![1, 2]));
}

#[test]
fn index_arithmetic_is_trap_free() {
  assert_eq!(index::after(3), 4);
  assert_eq!(index::before(3), 2);

  // Stepping below zero wraps rather than trapping; the wrapped value then
  // fails the bounds check of any element access.
  let wrapped = index::before(0);
  let deque: ConcurrentDeque<i32> = ConcurrentDeque::from(vec![1, 2, 3]);
  assert_eq!(deque.get(wrapped), None);

  assert_eq!(index::offset_by(2, 3), 5);
  assert_eq!(index::offset_by(2, -2), 0);
  assert_eq!(index::distance(1, 4), 3);
  assert_eq!(index::distance(4, 1), -3);
}

#[test]
fn offset_by_limited_stops_at_the_limit() {
  assert_eq!(index::offset_by_limited(0, 2, 5), Some(2));
  assert_eq!(index::offset_by_limited(0, 5, 5), Some(5));
  assert_eq!(index::offset_by_limited(0, 6, 5), None);
  assert_eq!(index::offset_by_limited(4, -2, 0), Some(2));
  assert_eq!(index::offset_by_limited(4, -5, 0), None);
  // A limit on the wrong side of travel does not constrain the step.
  assert_eq!(index::offset_by_limited(4, 2, 0), Some(6));
}
