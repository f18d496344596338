//! OS-backed synchronization for std environments.

pub mod std_rw_lock;

pub use std_rw_lock::StdRwLock;
