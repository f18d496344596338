//! Wrapper around `parking_lot::RwLock` implementing the core `RwLockLike` trait.


use concurrent_collections_core_rs::RwLockLike;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thin wrapper over [`parking_lot::RwLock`] for OS-thread environments.
///
/// This is the recommended backend for the collection adapters when running
/// on OS threads. parking_lot locks do not poison, so a panic inside a
/// guarded closure leaves the lock usable afterwards, and they are
/// eventually fair: a lock held under contention is periodically handed to
/// the longest waiter, which bounds reader and writer starvation.
pub struct StdRwLock<T>(RwLock<T>);

impl<T> StdRwLock<T> {
  /// Creates a new lock guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(RwLock::new(value))
  }

  /// Consumes the lock and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Returns a reference to the underlying `parking_lot::RwLock`.
  #[must_use]
  pub const fn as_inner(&self) -> &RwLock<T> {
    &self.0
  }

  /// Acquires shared access and returns the guard.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires exclusive access and returns the guard.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }
}

impl<T> RwLockLike<T> for StdRwLock<T> {
  type ReadGuard<'a>
    = RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdRwLock::new(value)
  }

  fn into_inner(self) -> T {
    StdRwLock::into_inner(self)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    StdRwLock::read(self)
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    StdRwLock::write(self)
  }
}

/// Convenience alias for read guards produced by [`StdRwLock`].
pub type StdReadGuard<'a, T> = RwLockReadGuard<'a, T>;

/// Convenience alias for write guards produced by [`StdRwLock`].
pub type StdWriteGuard<'a, T> = RwLockWriteGuard<'a, T>;
