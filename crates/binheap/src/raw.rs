//! Heap primitives over plain slices.
//!
//! The slice is an implicit binary tree rooted at index 0; the children of
//! `i` live at `2i + 1` and `2i + 2`. [`Heap`](crate::Heap) keeps its `Vec`
//! in this shape and the selection routines borrow a prefix of the caller's
//! slice, so both share exactly these walks.

use crate::priority::Priority;

/// Moves the element at `origin` toward the root while it outranks its parent.
/// Returns its final position.
pub(crate) fn sift_up<T, P>(heap: &mut [T], priority: &P, mut origin: usize) -> usize
where
    P: Priority<T> + ?Sized,
{
    while origin > 0 {
        let parent = (origin - 1) / 2;
        if !priority.precedes(&heap[origin], &heap[parent]) {
            break;
        }
        heap.swap(origin, parent);
        origin = parent;
    }
    origin
}

/// Moves the element at `origin` away from the root while one of its children
/// outranks it. Returns its final position.
pub(crate) fn sift_down<T, P>(heap: &mut [T], priority: &P, mut origin: usize) -> usize
where
    P: Priority<T> + ?Sized,
{
    let n = heap.len();
    loop {
        let left = 2 * origin + 1;
        if left >= n {
            break;
        }
        let right = left + 1;
        let child = if right < n && priority.precedes(&heap[right], &heap[left]) {
            right
        } else {
            left
        };
        if !priority.precedes(&heap[child], &heap[origin]) {
            break;
        }
        heap.swap(origin, child);
        origin = child;
    }
    origin
}

/// Bottom-up heap construction, O(n).
pub(crate) fn heapify<T, P>(heap: &mut [T], priority: &P)
where
    P: Priority<T> + ?Sized,
{
    for i in (0..heap.len() / 2).rev() {
        sift_down(heap, priority, i);
    }
}

/// Pops every element of a valid heap into the tail of the same slice.
///
/// The first pop lands in the last slot, so afterwards the slice runs from the
/// element `priority` ranks last to the one it ranks first.
pub(crate) fn drain_into_tail<T, P>(heap: &mut [T], priority: &P)
where
    P: Priority<T> + ?Sized,
{
    for end in (1..heap.len()).rev() {
        heap.swap(0, end);
        sift_down(&mut heap[..end], priority, 0);
    }
}

/// Returns `true` if every parent may pop no later than its children.
///
/// A pair passes when `priority.precedes(parent, child)` holds, or, for strict
/// predicates on tied elements, when the child does not outrank the parent.
pub fn is_heap<T, P>(heap: &[T], priority: &P) -> bool
where
    P: Priority<T> + ?Sized,
{
    (1..heap.len()).all(|i| {
        let (parent, child) = (&heap[(i - 1) / 2], &heap[i]);
        priority.precedes(parent, child) || !priority.precedes(child, parent)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::priority::{Ascending, Descending};
    use rand::Rng;

    #[test]
    fn heapify_and_drain() {
        let mut rng = rand::thread_rng();
        for n in 0..64 {
            let mut data = (0..n).map(|_| rng.gen_range(0..32)).collect::<Vec<u32>>();
            let mut expected = data.clone();
            expected.sort();
            heapify(&mut data, &Descending);
            assert!(is_heap(&data, &Descending));
            drain_into_tail(&mut data, &Descending);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn sift_reports_position() {
        let mut data = vec![1, 3, 2, 7, 4];
        assert!(is_heap(&data, &Ascending));
        data.push(0);
        assert_eq!(sift_up(&mut data, &Ascending, 5), 0);
        assert_eq!(data, [0, 3, 1, 7, 4, 2]);
        data[0] = 9;
        assert_eq!(sift_down(&mut data, &Ascending, 0), 5);
        assert_eq!(data, [1, 3, 2, 7, 4, 9]);
        assert!(is_heap(&data, &Ascending));
    }

    #[test]
    fn non_strict_priority() {
        let at_least = |a: &u32, b: &u32| a >= b;
        let mut rng = rand::thread_rng();
        for n in 0..64 {
            let mut data = (0..n).map(|_| rng.gen_range(0..4)).collect::<Vec<u32>>();
            let mut expected = data.clone();
            expected.sort();
            heapify(&mut data, &at_least);
            assert!(is_heap(&data, &at_least));
            drain_into_tail(&mut data, &at_least);
            assert_eq!(data, expected);
        }
        assert!(is_heap(&[5, 5], &at_least));
        assert!(is_heap(&[5, 5], &Descending));
        assert!(!is_heap(&[5, 6], &at_least));
        assert!(!is_heap(&[5, 6], &Descending));
    }
}
