//! Generic building blocks: binary heaps with top-N selection, and a sharded
//! concurrent map.
//!
//! The two crates are independent. They meet when several threads maintain
//! top-k state: each shard of a [`smap::ShardedMap`] can own a bounded
//! [`binheap::Heap`] and the shard lock serialises access to it.

pub mod prelude;

pub use binheap;
pub use smap;
