//! Writable cursors over a slice of cells.
//!
//! `Cell` lets any number of `Slot`s alias one buffer, so an algorithm can
//! read at one position and write at another (or the same) without `unsafe`.
//! `Cell` only moves whole values in and out, so reading lends the element by
//! taking it out and putting it back, even if the reader panics; this is why
//! reading and moving need `T: Default`. The moved-from state of a slot is
//! `T::default()`. Element types without a `Default` are read through
//! [`View`](super::View) instead.
//!
//! Positions are bounds-checked slice indices: misuse panics, it never reads
//! outside the buffer.

use core::cell::Cell;
use core::fmt;

use super::{BidirectionalCursor, ForwardCursor, Incrementable, IterMove, Readable, Writable};

/// Views a mutable slice as a slice of cells.
#[inline]
pub fn as_cells<T>(slice: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(slice).as_slice_of_cells()
}

/// Position in a `&[Cell<T>]`.
pub struct Slot<'a, T> {
    cells: &'a [Cell<T>],
    pos: usize,
}

impl<'a, T> Slot<'a, T> {
    /// Cursor at `pos` (`pos == cells.len()` is the end position).
    #[inline]
    pub fn at(cells: &'a [Cell<T>], pos: usize) -> Self {
        debug_assert!(pos <= cells.len(), "slot {pos} past end of {} cells", cells.len());
        Slot { cells, pos }
    }

    #[inline]
    pub fn begin(cells: &'a [Cell<T>]) -> Self {
        Self::at(cells, 0)
    }

    #[inline]
    pub fn end(cells: &'a [Cell<T>]) -> Self {
        Self::at(cells, cells.len())
    }

    /// `(begin, end)` of the whole buffer.
    #[inline]
    pub fn range(cells: &'a [Cell<T>]) -> (Self, Self) {
        (Self::begin(cells), Self::end(cells))
    }

    /// Offset from the start of the buffer.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos
    }

    #[inline]
    fn cell(&self) -> &'a Cell<T> {
        &self.cells[self.pos]
    }
}

impl<T> Clone for Slot<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<T> PartialEq for Slot<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && core::ptr::eq(self.cells.as_ptr(), other.cells.as_ptr())
    }
}

impl<T> Eq for Slot<'_, T> {}

impl<T> fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("pos", &self.pos)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<T> Incrementable for Slot<'_, T> {
    #[inline]
    fn step(&mut self) {
        self.pos += 1;
    }
}

impl<T> ForwardCursor for Slot<'_, T> {}

impl<T> BidirectionalCursor for Slot<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos -= 1;
    }
}

impl<T: Default> Readable for Slot<'_, T> {
    type Item = T;

    #[inline]
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let lent = Lent { cell: self.cell(), value: self.cell().take() };
        f(&lent.value)
    }
}

/// A value taken out of its cell for the length of a read.
///
/// Dropping puts it back, also when the reader unwinds.
struct Lent<'a, T: Default> {
    cell: &'a Cell<T>,
    value: T,
}

impl<T: Default> Drop for Lent<'_, T> {
    fn drop(&mut self) {
        self.cell.set(core::mem::take(&mut self.value));
    }
}

impl<T> Writable<T> for Slot<'_, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.cell().set(value);
    }
}

impl<T: Default> IterMove for Slot<'_, T> {
    #[inline]
    fn take(&self) -> T {
        self.cell().take()
    }
}
