//! Binary heaps ordered by an injected priority, and top-N selection built on
//! the same sift routines.
//!
//! None of the types here synchronise; share them between threads behind a
//! lock, for example a shard of a `smap::ShardedMap`.

mod comparable;
mod heap;
mod priority;
mod raw;
mod select;

pub use heap::{Heap, MaxHeap, MinHeap};
pub use priority::{Ascending, Descending, Inverse, Priority};
pub use raw::is_heap;
pub use select::{
    max_n, max_n_cloned, min_n, min_n_cloned, select, select_cloned, top_n, top_n_cloned,
};
