//! Thread-safe collection adapters.
//!
//! Each adapter owns its raw storage inside a [`Guarded`](crate::sync::Guarded)
//! container and routes every operation through a locked scope. All methods
//! take `&self`; wrap an adapter in `Arc` to share it across threads.

pub mod array;
pub mod deque;
pub mod map;
pub mod map_ops;
pub mod ordered_map;

pub use array::ConcurrentArray;
pub use deque::ConcurrentDeque;
pub use map::ConcurrentHashMap;
pub use map_ops::MapOps;
pub use ordered_map::ConcurrentOrderedMap;
