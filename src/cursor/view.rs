//! Read-only cursors over a shared slice.

use core::fmt;

use super::{BidirectionalCursor, ForwardCursor, Incrementable, Readable};

/// Position in a `&[T]`.
pub struct View<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> View<'a, T> {
    /// Cursor at `pos` (`pos == items.len()` is the end position).
    #[inline]
    pub fn at(items: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= items.len(), "view {pos} past end of {} items", items.len());
        View { items, pos }
    }

    #[inline]
    pub fn begin(items: &'a [T]) -> Self {
        Self::at(items, 0)
    }

    #[inline]
    pub fn end(items: &'a [T]) -> Self {
        Self::at(items, items.len())
    }

    #[inline]
    pub fn range(items: &'a [T]) -> (Self, Self) {
        (Self::begin(items), Self::end(items))
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    /// The element at this position, borrowed for the slice's lifetime.
    #[inline]
    pub fn get(&self) -> &'a T {
        &self.items[self.pos]
    }
}

impl<T> Clone for View<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> PartialEq for View<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && core::ptr::eq(self.items.as_ptr(), other.items.as_ptr())
    }
}

impl<T> Eq for View<'_, T> {}

impl<T> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> Incrementable for View<'_, T> {
    #[inline]
    fn step(&mut self) {
        self.pos += 1;
    }
}

impl<T> ForwardCursor for View<'_, T> {}

impl<T> BidirectionalCursor for View<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos -= 1;
    }
}

impl<T> Readable for View<'_, T> {
    type Item = T;

    #[inline]
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.get())
    }
}
