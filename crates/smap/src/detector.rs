use num_traits::AsPrimitive;

/// Maps a key to the index of the shard that owns it.
///
/// Must be deterministic and return a value below the shard count of the map
/// it is used with.
pub trait ShardDetector<K: ?Sized> {
    fn detect(&self, key: &K) -> usize;
}

impl<K: ?Sized, F> ShardDetector<K> for F
where
    F: Fn(&K) -> usize,
{
    #[inline]
    fn detect(&self, key: &K) -> usize {
        self(key)
    }
}

/// Shards primitive integer keys by their value modulo the shard count.
/// Negative keys wrap to `u64` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulo {
    shards: u64,
}

impl Modulo {
    pub fn new(shards: usize) -> Self {
        assert!(shards != 0, "shard count must be positive");
        Self {
            shards: shards as u64,
        }
    }
}

impl<K: AsPrimitive<u64>> ShardDetector<K> for Modulo {
    #[inline]
    fn detect(&self, key: &K) -> usize {
        (key.as_() % self.shards) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn modulo() {
        let m = Modulo::new(8);
        assert_eq!(m.detect(&123u32), 3);
        assert_eq!(m.detect(&8i64), 0);
        assert!(m.detect(&-1i32) < 8);
        assert_eq!(m.detect(&-1i32), m.detect(&-1i32));
    }

    #[test]
    fn closures() {
        let by_len = |key: &String| key.len() % 4;
        assert_eq!(by_len.detect(&"hello".to_string()), 1);
    }
}
