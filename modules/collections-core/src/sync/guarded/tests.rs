use std::panic::{catch_unwind, AssertUnwindSafe};

use super::Guarded;

#[test]
fn read_write_round_trip() {
  let cell: Guarded<u32> = Guarded::new(1);
  assert_eq!(cell.with_read(|value| *value), 1);

  cell.with_write(|value| *value = 5);
  assert_eq!(cell.with_read(|value| *value), 5);
  assert_eq!(cell.into_inner(), 5);
}

#[test]
fn closure_results_pass_through() {
  let cell: Guarded<Vec<u32>> = Guarded::new(vec![1, 2, 3]);

  let sum = cell.with_read(|items| items.iter().copied().sum::<u32>());
  assert_eq!(sum, 6);

  let popped = cell.with_write(Vec::pop);
  assert_eq!(popped, Some(3));
}

#[test]
fn default_starts_empty() {
  let cell: Guarded<Vec<u32>> = Guarded::default();
  assert!(cell.with_read(Vec::is_empty));
}

#[test]
fn panicking_writer_releases_lock() {
  let cell: Guarded<Vec<u32>> = Guarded::new(vec![1]);

  let outcome = catch_unwind(AssertUnwindSafe(|| {
    cell.with_write(|items| {
      items.push(2);
      panic!("writer failure");
    });
  }));
  assert!(outcome.is_err());

  // The mutation before the panic is visible and the lock is free again.
  assert_eq!(cell.with_read(Vec::len), 2);
  cell.with_write(|items| items.push(3));
  assert_eq!(cell.with_read(Vec::len), 3);
}

#[test]
fn panicking_reader_releases_lock() {
  let cell: Guarded<u32> = Guarded::new(7);

  let outcome = catch_unwind(AssertUnwindSafe(|| {
    cell.with_read(|_| panic!("reader failure"));
  }));
  assert!(outcome.is_err());

  cell.with_write(|value| *value += 1);
  assert_eq!(cell.with_read(|value| *value), 8);
}
