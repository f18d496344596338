//! Synchronization primitives underpinning the collection adapters.

pub mod guarded;
pub mod rw_lock_like;

pub use guarded::Guarded;
pub use rw_lock_like::RwLockLike;
