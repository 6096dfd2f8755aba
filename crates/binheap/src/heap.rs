use crate::priority::{Ascending, Descending, Priority};
use crate::raw;
use std::fmt;

/// A binary heap ordered by an injected [`Priority`].
///
/// The root is the element the priority ranks first. Unlike
/// [`std::collections::BinaryHeap`], the order is a value carried by the heap,
/// so closures that capture state can be used as well as [`Ascending`] and
/// [`Descending`].
#[derive(Clone)]
pub struct Heap<T, P> {
    pub(crate) data: Vec<T>,
    pub(crate) priority: P,
}

/// Pops the smallest element first.
pub type MinHeap<T> = Heap<T, Ascending>;

/// Pops the largest element first.
pub type MaxHeap<T> = Heap<T, Descending>;

impl<T, P: Priority<T>> Heap<T, P> {
    pub fn with_priority(priority: P) -> Self {
        Self {
            data: Vec::new(),
            priority,
        }
    }

    /// Builds a heap out of `data` in O(n).
    pub fn from_vec_with_priority(mut data: Vec<T>, priority: P) -> Self {
        raw::heapify(&mut data, &priority);
        Self { data, priority }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn priority(&self) -> &P {
        &self.priority
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        raw::sift_up(&mut self.data, &self.priority, last);
    }

    /// Returns the root.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn peek(&self) -> &T {
        match self.data.first() {
            Some(top) => top,
            None => panic!("`peek` called on an empty heap"),
        }
    }

    /// Removes and returns the root.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(top) => top,
            None => panic!("`pop` called on an empty heap"),
        }
    }

    pub fn try_pop(&mut self) -> Option<T> {
        let mut item = self.data.pop()?;
        if let Some(top) = self.data.first_mut() {
            std::mem::swap(&mut item, top);
            raw::sift_down(&mut self.data, &self.priority, 0);
        }
        Some(item)
    }

    /// Pushes `item` and pops the root in one pass.
    ///
    /// If `item` outranks the root, or the heap is empty, it comes straight
    /// back and the heap is not touched. Otherwise it takes the root's place
    /// and the old root is returned.
    pub fn push_pop(&mut self, mut item: T) -> T {
        if let Some(top) = self.data.first_mut() {
            if !self.priority.precedes(&item, top) {
                std::mem::swap(&mut item, top);
                raw::sift_down(&mut self.data, &self.priority, 0);
            }
        }
        item
    }

    /// Swaps the root for `item` and returns the old root.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn replace(&mut self, mut item: T) -> T {
        let Some(top) = self.data.first_mut() else {
            panic!("`replace` called on an empty heap")
        };
        std::mem::swap(&mut item, top);
        raw::sift_down(&mut self.data, &self.priority, 0);
        item
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The backing storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        raw::drain_into_tail(&mut self.data, &self.priority);
        self.data.reverse();
        self.data
    }
}

impl<T, P: Priority<T> + Default> Heap<T, P> {
    pub fn new() -> Self {
        Self::with_priority(P::default())
    }
}

impl<T, P: Priority<T> + Default> Default for Heap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority<T> + Default> From<Vec<T>> for Heap<T, P> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_priority(data, P::default())
    }
}

impl<T, P: Priority<T> + Default> FromIterator<T> for Heap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, P: Priority<T>> Extend<T> for Heap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Heap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("data", &self.data).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain<T, P: Priority<T>>(mut heap: Heap<T, P>) -> Vec<T> {
        let mut result = Vec::new();
        while !heap.is_empty() {
            result.push(heap.pop());
        }
        result
    }

    #[test]
    fn min_heap_from_vec() {
        let heap = MinHeap::from(vec![5u8, 10, 1, 5, 2, 7]);
        assert_eq!(drain(heap), [1, 2, 5, 5, 7, 10]);
        let words = ["foo", "bar", "foobar", "zzz", "aaa"].map(String::from);
        let heap = MinHeap::from(words.to_vec());
        assert_eq!(drain(heap), ["aaa", "bar", "foo", "foobar", "zzz"]);
    }

    #[test]
    fn max_heap_from_vec() {
        let heap = MaxHeap::from(vec![5u8, 10, 1, 5, 2, 7]);
        assert_eq!(drain(heap), [10, 7, 5, 5, 2, 1]);
        let heap: MaxHeap<&str> = ["foo", "bar", "foobar", "zzz", "aaa"].into_iter().collect();
        assert_eq!(drain(heap), ["zzz", "foobar", "foo", "bar", "aaa"]);
    }

    #[test]
    fn push_pop_on_empty_heap() {
        let mut heap = MinHeap::new();
        assert_eq!(heap.push_pop(3), 3);
        assert!(heap.is_empty());
        assert_eq!(heap.try_pop(), None);
    }

    #[test]
    fn into_sorted_vec_is_pop_order() {
        let mut heap = Heap::with_priority(|a: &i32, b: &i32| a % 3 > b % 3);
        heap.extend([3, 4, 5, 6, 7, 8]);
        let sorted = heap.into_sorted_vec();
        assert_eq!(
            sorted.iter().map(|x| x % 3).collect::<Vec<_>>(),
            [2, 2, 1, 1, 0, 0]
        );
    }

    #[test]
    #[should_panic(expected = "`peek` called on an empty heap")]
    fn peek_empty() {
        MaxHeap::<u8>::new().peek();
    }

    #[test]
    #[should_panic(expected = "`pop` called on an empty heap")]
    fn pop_empty() {
        MaxHeap::<u8>::new().pop();
    }

    #[test]
    #[should_panic(expected = "`replace` called on an empty heap")]
    fn replace_empty() {
        MinHeap::new().replace(1u8);
    }
}
