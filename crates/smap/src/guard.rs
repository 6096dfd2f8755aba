//! Scoped access to a single shard.
//!
//! A guard holds the shard's lock for its whole lifetime, so a batch of
//! lookups or writes that land in the same shard pays for one acquisition.
//! Every key passed to a guard must belong to its shard.

use crate::detector::ShardDetector;
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::hash::Hash;

fn check_owner<K, D: ShardDetector<K>>(detector: &D, id: usize, key: &K) {
    let owner = detector.detect(key);
    assert_eq!(
        owner, id,
        "key belongs to shard {owner}, not to the locked shard {id}"
    );
}

pub struct ShardReadGuard<'a, K, V, D> {
    pub(crate) id: usize,
    pub(crate) detector: &'a D,
    pub(crate) shard: RwLockReadGuard<'a, HashMap<K, V>>,
}

impl<K: Eq + Hash, V, D: ShardDetector<K>> ShardReadGuard<'_, K, V, D> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.shard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shard.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        check_owner(self.detector, self.id, key);
        self.shard.get(key)
    }

    /// Calls `f` for every entry of the shard until it returns `false`.
    pub fn range(&self, mut f: impl FnMut(&K, &V) -> bool) {
        for (key, value) in self.shard.iter() {
            if !f(key, value) {
                break;
            }
        }
    }
}

pub struct ShardWriteGuard<'a, K, V, D> {
    pub(crate) id: usize,
    pub(crate) detector: &'a D,
    pub(crate) shard: RwLockWriteGuard<'a, HashMap<K, V>>,
}

impl<K: Eq + Hash, V, D: ShardDetector<K>> ShardWriteGuard<'_, K, V, D> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.shard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shard.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        check_owner(self.detector, self.id, key);
        self.shard.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        check_owner(self.detector, self.id, key);
        self.shard.get_mut(key)
    }

    /// Returns the value previously stored under `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        check_owner(self.detector, self.id, &key);
        self.shard.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        check_owner(self.detector, self.id, key);
        self.shard.remove(key)
    }

    pub fn range(&self, mut f: impl FnMut(&K, &V) -> bool) {
        for (key, value) in self.shard.iter() {
            if !f(key, value) {
                break;
            }
        }
    }
}
