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

//! OS-thread binding for the lock-guarded collections.
//!
//! This crate binds the abstractions defined in
//! `concurrent_collections_core_rs` to an OS-backed reader-writer lock
//! ([`StdRwLock`], a `parking_lot::RwLock` wrapper) and provides ready-made
//! aliases plus `make_arc_*` constructors for `Arc`-shared adapters.

/// Aliases and constructors binding the core adapters to [`StdRwLock`].
pub mod collections;
/// The OS-backed lock implementation.
pub mod sync;

pub use collections::{
  make_arc_array, make_arc_deque, make_arc_hash_map, make_arc_ordered_map, ArcArray, ArcDeque, ArcHashMap,
  ArcOrderedMap, StdArray, StdDeque, StdHashMap, StdOrderedMap,
};
pub use sync::StdRwLock;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use concurrent_collections_core_rs::{
    collections::deque::index, ConcurrentArray, ConcurrentDeque, ConcurrentHashMap, ConcurrentOrderedMap, Guarded,
    MapOps, RwLockLike,
  };

  pub use crate::{
    collections::{
      make_arc_array, make_arc_deque, make_arc_hash_map, make_arc_ordered_map, ArcArray, ArcDeque, ArcHashMap,
      ArcOrderedMap, StdArray, StdDeque, StdHashMap, StdOrderedMap,
    },
    sync::StdRwLock,
  };
}
