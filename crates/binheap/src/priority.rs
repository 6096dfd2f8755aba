/// Decides which of two elements leaves a heap first.
///
/// Implementations must be pure: the answer for a given pair may not change
/// while a heap holds the elements. Closures `Fn(&T, &T) -> bool` implement
/// this trait, so any comparator can be injected directly.
pub trait Priority<T: ?Sized> {
    /// Returns `true` if `a` must not be popped later than `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

impl<T: Ord + ?Sized> Priority<T> for Ascending {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> Priority<T> for Descending {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Flips the wrapped priority, so the weakest element reaches the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inverse<P>(pub P);

impl<T: ?Sized, P: Priority<T>> Priority<T> for Inverse<P> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.0.precedes(b, a)
    }
}
