//! Top-N selection.
//!
//! The first `k` elements are turned into a bounded heap ordered by the
//! inverse of the requested priority, so its root is the weakest element kept
//! so far. Every later element that outranks the root replaces it. Draining the
//! bounded heap into its own tail then leaves the winners fully ordered.
//!
//! This costs O(n + k log k) comparisons for typical inputs against
//! O(n log n) for sorting the whole source.

use crate::priority::{Ascending, Descending, Inverse, Priority};
use crate::raw;

/// Moves the `k` elements `priority` ranks first to the front of `data`, in
/// order, and returns them.
///
/// The remaining elements stay in `data[k..]` in unspecified order. `k` is
/// clamped to `data.len()`; `k == 0` leaves `data` untouched.
pub fn top_n<T, F>(data: &mut [T], k: usize, priority: F) -> &mut [T]
where
    F: Fn(&T, &T) -> bool,
{
    select(data, k, priority)
}

/// [`top_n`] in ascending order.
pub fn min_n<T: Ord>(data: &mut [T], k: usize) -> &mut [T] {
    select(data, k, Ascending)
}

/// [`top_n`] in descending order.
pub fn max_n<T: Ord>(data: &mut [T], k: usize) -> &mut [T] {
    select(data, k, Descending)
}

/// Like [`top_n`], but works on a copy and leaves `data` as it was.
pub fn top_n_cloned<T, F>(data: &[T], k: usize, priority: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    select_cloned(data, k, priority)
}

pub fn min_n_cloned<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    select_cloned(data, k, Ascending)
}

pub fn max_n_cloned<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    select_cloned(data, k, Descending)
}

/// Generic form of [`top_n`] for any [`Priority`].
pub fn select<T, P: Priority<T>>(data: &mut [T], k: usize, priority: P) -> &mut [T] {
    let n = data.len();
    if k >= n {
        log::trace!("top-{k} requested out of {n} elements, sorting all of them");
    }
    let k = k.min(n);
    if k == 0 {
        return &mut data[..0];
    }
    let inverse = Inverse(priority);
    let (heap, rest) = data.split_at_mut(k);
    raw::heapify(heap, &inverse);
    for item in rest.iter_mut() {
        if inverse.0.precedes(item, &heap[0]) {
            std::mem::swap(item, &mut heap[0]);
            raw::sift_down(heap, &inverse, 0);
        }
    }
    raw::drain_into_tail(heap, &inverse);
    heap
}

/// Generic form of [`top_n_cloned`] for any [`Priority`].
pub fn select_cloned<T: Clone, P: Priority<T>>(data: &[T], k: usize, priority: P) -> Vec<T> {
    let k = k.min(data.len());
    if k == 0 {
        return Vec::new();
    }
    let mut buffer = data.to_vec();
    select(&mut buffer, k, priority);
    buffer.truncate(k);
    buffer
}
