use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("Invalid sharded map options: {reason}.")]
    InvalidOptions { reason: String },
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShardError {
    #[error("Shard {id} not found, the map has {count} shards.")]
    OutOfRange { id: usize, count: usize },
}
