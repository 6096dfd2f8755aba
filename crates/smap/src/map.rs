use crate::detector::{Modulo, ShardDetector};
use crate::error::{CreateError, ShardError};
use crate::guard::{ShardReadGuard, ShardWriteGuard};
use crate::options::SmapOptions;
use num_traits::AsPrimitive;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use validator::Validate;

/// A hash map split into shards, each behind its own reader-writer lock.
///
/// Operations on keys in different shards never contend. The shard of a key is
/// chosen by the detector `D`, which must be deterministic.
pub struct ShardedMap<K, V, D> {
    shards: Box<[RwLock<HashMap<K, V>>]>,
    detector: D,
}

/// Sharded map over primitive integer keys.
pub type IntegerMap<K, V> = ShardedMap<K, V, Modulo>;

impl<K: Eq + Hash, V, D: ShardDetector<K>> ShardedMap<K, V, D> {
    /// # Panics
    ///
    /// Panics if `shards` is zero.
    pub fn new(shards: usize, shard_capacity: usize, detector: D) -> Self {
        assert!(shards != 0, "shard count must be positive");
        log::debug!("Create sharded map with {shards} shards of {shard_capacity} slots.");
        Self {
            shards: (0..shards)
                .map(|_| RwLock::new(HashMap::with_capacity(shard_capacity)))
                .collect(),
            detector,
        }
    }

    pub fn with_options(options: &SmapOptions, detector: D) -> Result<Self, CreateError> {
        if let Err(errors) = options.validate() {
            return Err(CreateError::InvalidOptions {
                reason: errors.to_string(),
            });
        }
        Ok(Self::new(
            options.shards as usize,
            options.shard_capacity as usize,
            detector,
        ))
    }

    pub fn shards_count(&self) -> usize {
        self.shards.len()
    }

    /// # Panics
    ///
    /// Panics if the detector returns an index past the last shard.
    pub fn shard_id(&self, key: &K) -> usize {
        let id = self.detector.detect(key);
        assert!(
            id < self.shards.len(),
            "shard detector returned {id} for a map of {} shards",
            self.shards.len()
        );
        id
    }

    fn shard(&self, key: &K) -> &RwLock<HashMap<K, V>> {
        &self.shards[self.shard_id(key)]
    }

    pub fn store(&self, key: K, value: V) {
        self.shard(&key).write().insert(key, value);
    }

    pub fn delete(&self, key: &K) {
        self.shard(key).write().remove(key);
    }

    pub fn load_and_delete(&self, key: &K) -> Option<V> {
        self.shard(key).write().remove(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.shard(key).read().contains_key(key)
    }

    /// Sum of the shard sizes, each read under its own lock.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.read().is_empty())
    }

    pub fn read_shard(&self, id: usize) -> Result<ShardReadGuard<'_, K, V, D>, ShardError> {
        let shard = self.shards.get(id).ok_or(ShardError::OutOfRange {
            id,
            count: self.shards.len(),
        })?;
        Ok(ShardReadGuard {
            id,
            detector: &self.detector,
            shard: shard.read(),
        })
    }

    pub fn write_shard(&self, id: usize) -> Result<ShardWriteGuard<'_, K, V, D>, ShardError> {
        let shard = self.shards.get(id).ok_or(ShardError::OutOfRange {
            id,
            count: self.shards.len(),
        })?;
        Ok(ShardWriteGuard {
            id,
            detector: &self.detector,
            shard: shard.write(),
        })
    }

    /// Runs `f` on the value stored under `key` while its shard is write-locked,
    /// inserting `init()` first if the key is absent.
    pub fn update<R>(&self, key: K, init: impl FnOnce() -> V, f: impl FnOnce(&mut V) -> R) -> R {
        let mut shard = self.shard(&key).write();
        f(shard.entry(key).or_insert_with(init))
    }
}

impl<K: Eq + Hash, V: Clone, D: ShardDetector<K>> ShardedMap<K, V, D> {
    pub fn load(&self, key: &K) -> Option<V> {
        self.shard(key).read().get(key).cloned()
    }

    /// Returns the value for `key`, creating it with `f` if absent.
    ///
    /// The boolean is `true` if the value was already there. `f` is not called
    /// in that case, and runs at most once otherwise.
    pub fn load_or_create(&self, key: K, f: impl FnOnce() -> V) -> (V, bool) {
        let shard = self.shard(&key);
        if let Some(value) = shard.read().get(&key) {
            return (value.clone(), true);
        }
        match shard.write().entry(key) {
            Entry::Occupied(entry) => (entry.get().clone(), true),
            Entry::Vacant(entry) => (entry.insert(f()).clone(), false),
        }
    }

    /// Calls `f` for every entry until it returns `false`.
    ///
    /// Keys of a shard are collected under its read lock, then every value is
    /// re-read under a short read lock and `f` runs with no lock held, so `f`
    /// may call back into the map. Entries removed in the meantime are skipped.
    /// This is not a consistent snapshot.
    pub fn range(&self, mut f: impl FnMut(&K, &V) -> bool)
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        for shard in self.shards.iter() {
            keys.clear();
            keys.extend(shard.read().keys().cloned());
            for key in keys.iter() {
                let value = shard.read().get(key).cloned();
                if let Some(value) = value {
                    if !f(key, &value) {
                        return;
                    }
                }
            }
        }
    }
}

impl<K: Eq + Hash, V: Clone + PartialEq, D: ShardDetector<K>> ShardedMap<K, V, D> {
    /// Stores `new` under `key` if and only if the current value equals `old`.
    ///
    /// Returns the replaced value on success, or the current value (`None` if
    /// the key is absent) on failure.
    pub fn compare_and_swap(&self, key: &K, old: &V, new: V) -> Result<V, Option<V>> {
        let mut shard = self.shard(key).write();
        match shard.get_mut(key) {
            Some(current) if *current == *old => Ok(std::mem::replace(current, new)),
            current => Err(current.cloned()),
        }
    }
}

impl<K: AsPrimitive<u64> + Eq + Hash, V> ShardedMap<K, V, Modulo> {
    /// Integer keys sharded by value modulo `shards`.
    pub fn integer(shards: usize, shard_capacity: usize) -> Self {
        Self::new(shards, shard_capacity, Modulo::new(shards))
    }
}
