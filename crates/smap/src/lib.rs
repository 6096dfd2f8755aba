//! A concurrent hash map sharded over reader-writer locks.
//!
//! Keys are routed to shards by a caller-supplied [`ShardDetector`]. Each
//! shard is a `HashMap` behind a `parking_lot::RwLock`, and callers who need
//! several operations under one lock take a [`ShardReadGuard`] or
//! [`ShardWriteGuard`] for that shard.

mod detector;
mod error;
mod guard;
mod map;
mod options;

pub use detector::{Modulo, ShardDetector};
pub use error::{CreateError, ShardError};
pub use guard::{ShardReadGuard, ShardWriteGuard};
pub use map::{IntegerMap, ShardedMap};
pub use options::SmapOptions;
