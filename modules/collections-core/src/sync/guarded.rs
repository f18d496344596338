//! The lock-guarded value container.

#[cfg(test)]
mod tests;

use core::marker::PhantomData;

use crate::sync::rw_lock_like::RwLockLike;

/// A single value guarded by a reader-writer lock.
///
/// The value is never observable outside a locked scope: all access goes
/// through [`Guarded::with_read`] and [`Guarded::with_write`], which run a
/// caller-supplied closure while the matching guard is held and return the
/// closure's result. The guard is released when it drops, so release happens
/// exactly once on every exit path, including panic unwinding inside the
/// closure. A panicking closure propagates unchanged after the guard drops;
/// neither backend poisons, so the container stays usable afterwards.
pub struct Guarded<T, L = spin::RwLock<T>>
where
  L: RwLockLike<T>, {
  lock:   L,
  _value: PhantomData<fn() -> T>,
}

impl<T, L> Guarded<T, L>
where
  L: RwLockLike<T>,
{
  /// Creates a container owning the provided initial value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self { lock: L::new(value), _value: PhantomData }
  }

  /// Acquires shared access and applies `op` to the contained value.
  ///
  /// Multiple readers may run concurrently; none runs while a writer holds
  /// the lock, so `op` never observes a partial write.
  pub fn with_read<R>(&self, op: impl FnOnce(&T) -> R) -> R {
    let guard = self.lock.read();
    op(&guard)
  }

  /// Acquires exclusive access and applies `op` to the contained value.
  pub fn with_write<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.lock.write();
    op(&mut guard)
  }

  /// Consumes the container and returns the inner value.
  pub fn into_inner(self) -> T {
    self.lock.into_inner()
  }
}

impl<T, L> Default for Guarded<T, L>
where
  T: Default,
  L: RwLockLike<T>,
{
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T, L> core::fmt::Debug for Guarded<T, L>
where
  L: RwLockLike<T>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Guarded").finish()
  }
}
