use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use validator::Validate;

const MAX_SHARDS: u32 = 1_048_576;
const MAX_SHARD_CAPACITY: u32 = 1_073_741_824;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SmapOptions {
    #[serde(default = "SmapOptions::default_shards")]
    #[validate(range(min = 1, max = MAX_SHARDS))]
    pub shards: u32,
    /// Initial capacity of every shard.
    #[serde(default = "SmapOptions::default_shard_capacity")]
    #[validate(range(max = MAX_SHARD_CAPACITY))]
    pub shard_capacity: u32,
}

impl SmapOptions {
    fn default_shards() -> u32 {
        heuristic_shards()
    }
    fn default_shard_capacity() -> u32 {
        0
    }

    /// Spreads `expected_items` over a shard count derived from the available
    /// parallelism.
    ///
    /// The formula is a tuning knob and may change.
    pub fn heuristic(expected_items: usize) -> Self {
        let shards = heuristic_shards();
        let per_shard = expected_items / shards as usize + 1;
        let shard_capacity = per_shard.min(MAX_SHARD_CAPACITY as usize) as u32;
        log::debug!(
            "Heuristic distribution of {expected_items} items: {shards} shards, {shard_capacity} slots each."
        );
        Self {
            shards,
            shard_capacity,
        }
    }
}

impl Default for SmapOptions {
    fn default() -> Self {
        Self {
            shards: Self::default_shards(),
            shard_capacity: Self::default_shard_capacity(),
        }
    }
}

fn heuristic_shards() -> u32 {
    let procs = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    (procs * procs * 24).min(MAX_SHARDS as usize) as u32
}
