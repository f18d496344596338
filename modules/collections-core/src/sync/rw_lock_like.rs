//! Reader-writer lock abstraction.

use core::ops::{Deref, DerefMut};

/// Generic reader-writer lock abstraction for backend-agnostic code.
///
/// At most one writer or any number of readers hold the lock at a time.
/// Acquisition blocks the calling thread unconditionally; there is no
/// timeout, cancellation, or reentrancy guarantee. Release happens exactly
/// once per acquisition, when the returned guard drops.
///
/// Fairness is a property of the backend, not of this trait. The
/// [`spin::RwLock`] implementation below makes no fairness guarantee at all;
/// callers running on OS threads should prefer an OS-backed implementation
/// with a documented policy.
pub trait RwLockLike<T> {
  /// Guard type returned by [`RwLockLike::read`].
  type ReadGuard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Guard type returned by [`RwLockLike::write`].
  type WriteGuard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new lock instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the inner value.
  fn into_inner(self) -> T;

  /// Acquires shared access and returns the read guard.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Acquires exclusive access and returns the write guard.
  fn write(&self) -> Self::WriteGuard<'_>;
}

// spin::RwLock implementation, the default backend for the adapters in this
// crate. Readers spin while a writer is active and vice versa; no fairness
// or starvation-freedom guarantee.
impl<T> RwLockLike<T> for spin::RwLock<T> {
  type ReadGuard<'a>
    = spin::RwLockReadGuard<'a, T>
  where
    T: 'a;
  type WriteGuard<'a>
    = spin::RwLockWriteGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self::new(value)
  }

  fn into_inner(self) -> T {
    self.into_inner()
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.read()
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.write()
  }
}

/// Convenience alias for read guards produced by [`RwLockLike`].
pub type ReadGuardOf<'a, L, T> = <L as RwLockLike<T>>::ReadGuard<'a>;

/// Convenience alias for write guards produced by [`RwLockLike`].
pub type WriteGuardOf<'a, L, T> = <L as RwLockLike<T>>::WriteGuard<'a>;
