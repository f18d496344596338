#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::redundant_clone))]

//! Core abstractions for lock-guarded thread-safe collections.
//!
//! Everything in this crate is built over a single primitive: [`Guarded`], a
//! value owned by a reader-writer lock and reachable only through the scoped
//! [`Guarded::with_read`] / [`Guarded::with_write`] operations. The lock
//! itself is abstracted behind the [`RwLockLike`] trait so that the same
//! adapters run over a spin lock (the default backend provided here) or an
//! OS-backed lock supplied by a companion crate.
//!
//! The collection adapters translate idiomatic array, deque, and map
//! operations into locked access. Out-of-range indices and absent keys are
//! never fatal: reads return `None` and writes degrade to no-ops, so
//! concurrent callers do not need to synchronise size checks with mutation.

/// Thread-safe collection adapters built over [`Guarded`].
pub mod collections;
/// Lock abstraction and the guarded container primitive.
pub mod sync;

pub use collections::{ConcurrentArray, ConcurrentDeque, ConcurrentHashMap, ConcurrentOrderedMap, MapOps};
pub use sync::{Guarded, RwLockLike};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use crate::{
    collections::{deque::index, ConcurrentArray, ConcurrentDeque, ConcurrentHashMap, ConcurrentOrderedMap, MapOps},
    sync::{Guarded, RwLockLike},
  };
}
