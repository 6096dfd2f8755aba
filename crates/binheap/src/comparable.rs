use crate::heap::Heap;
use crate::priority::Priority;
use crate::raw;

/// Value-addressed lookup and removal, available when elements can be compared
/// for equality. Both are linear scans over the backing storage and act on the
/// first match in storage order.
impl<T: PartialEq, P: Priority<T>> Heap<T, P> {
    pub fn search(&self, item: &T) -> bool {
        self.data.contains(item)
    }

    /// Removes one element equal to `item`. Returns `false` if there was none.
    pub fn delete(&mut self, item: &T) -> bool {
        let Some(index) = self.data.iter().position(|x| x == item) else {
            return false;
        };
        self.data.swap_remove(index);
        // the former last element now sits at `index` and may belong above or below it
        if index < self.data.len()
            && raw::sift_down(&mut self.data, &self.priority, index) == index
        {
            raw::sift_up(&mut self.data, &self.priority, index);
        }
        true
    }
}

#[cfg(test)]
mod test {
    use crate::raw::is_heap;
    use crate::{Heap, MinHeap};

    #[test]
    fn delete_by_length() {
        let by_len = |a: &&str, b: &&str| a.len() > b.len();
        let mut heap = Heap::with_priority(by_len);
        assert_eq!(heap.len(), 0);
        assert!(!heap.search(&"333"));
        assert!(!heap.delete(&"333"));

        heap.push("1");
        assert!(!heap.search(&"333"));
        assert!(!heap.delete(&"333"));
        assert!(heap.search(&"1"));

        heap.push("22");
        assert!(heap.delete(&"1"));
        assert!(!heap.search(&"1"));
        assert!(heap.search(&"22"));
        assert_eq!(heap.len(), 1);

        heap.extend(["4444", "88888888", "55555", "1", "4444", "4444", "7777777"]);
        assert_eq!(heap.len(), 8);

        assert_eq!(*heap.peek(), "88888888");
        assert!(heap.delete(&"88888888"));
        assert!(!heap.search(&"88888888"));
        assert!(!heap.delete(&"88888888"));
        assert!(is_heap(heap.as_slice(), &by_len));

        for _ in 0..3 {
            assert!(heap.search(&"4444"));
            assert!(heap.delete(&"4444"));
            assert!(is_heap(heap.as_slice(), &by_len));
        }
        assert!(!heap.search(&"4444"));
        assert!(!heap.delete(&"4444"));
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), ["7777777", "55555", "22", "1"]);
    }

    #[test]
    fn delete_needs_sift_up() {
        // 9 moves from the last leaf into the 13 slot under 11, then climbs
        let mut heap = MinHeap::from(vec![1, 10, 3, 11, 12, 4, 5, 13, 14, 15, 16, 6, 7, 8, 9]);
        assert_eq!(heap.as_slice()[7], 13);
        assert!(is_heap(heap.as_slice(), &crate::Ascending));
        assert!(heap.delete(&13));
        assert!(is_heap(heap.as_slice(), &crate::Ascending));
        assert_eq!(
            heap.into_sorted_vec(),
            [1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 14, 15, 16]
        );
    }
}
