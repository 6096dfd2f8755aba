pub use binheap::{
    max_n, max_n_cloned, min_n, min_n_cloned, top_n, top_n_cloned, Ascending, Descending, Heap,
    MaxHeap, MinHeap, Priority,
};
pub use smap::{IntegerMap, Modulo, ShardDetector, ShardedMap, SmapOptions};
