//! Whole-sequence arguments.
//!
//! The sequence shape of every dispatch object takes a [`Sequence`] and
//! splits it into `(begin, end)` before running the cursor shape. Explicit
//! cursor pairs are sequences too, so the sequence shape accepts both.

use super::slot::as_cells;
use super::{ForwardCursor, Sentinel, Slot, View};

/// Anything that yields its own start cursor and end sentinel.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence",
    label = "requires `Sequence`",
    note = "pass a `(begin, end)` cursor pair, a slice, an array or a vector"
)]
pub trait Sequence {
    type Cursor: ForwardCursor;
    type Sentinel: Sentinel<Self::Cursor>;

    /// Splits the sequence into its bounds.
    fn bounds(self) -> (Self::Cursor, Self::Sentinel);
}

impl<C, S> Sequence for (C, S)
where
    C: ForwardCursor,
    S: Sentinel<C>,
{
    type Cursor = C;
    type Sentinel = S;

    #[inline]
    fn bounds(self) -> (C, S) {
        self
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Cursor = View<'a, T>;
    type Sentinel = View<'a, T>;

    #[inline]
    fn bounds(self) -> (View<'a, T>, View<'a, T>) {
        View::range(self)
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Cursor = View<'a, T>;
    type Sentinel = View<'a, T>;

    #[inline]
    fn bounds(self) -> (View<'a, T>, View<'a, T>) {
        View::range(self.as_slice())
    }
}

impl<'a, T> Sequence for &'a mut [T] {
    type Cursor = Slot<'a, T>;
    type Sentinel = Slot<'a, T>;

    #[inline]
    fn bounds(self) -> (Slot<'a, T>, Slot<'a, T>) {
        Slot::range(as_cells(self))
    }
}

impl<'a, T, const N: usize> Sequence for &'a mut [T; N] {
    type Cursor = Slot<'a, T>;
    type Sentinel = Slot<'a, T>;

    #[inline]
    fn bounds(self) -> (Slot<'a, T>, Slot<'a, T>) {
        Slot::range(as_cells(self.as_mut_slice()))
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> Sequence for &'a mut alloc::vec::Vec<T> {
    type Cursor = Slot<'a, T>;
    type Sentinel = Slot<'a, T>;

    #[inline]
    fn bounds(self) -> (Slot<'a, T>, Slot<'a, T>) {
        Slot::range(as_cells(self.as_mut_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{distance, Until};

    #[test]
    fn test_slice_bounds() {
        let data = [1, 2, 3];
        let (b, e) = (&data[..]).bounds();
        assert_eq!(distance(b, &e), 3);
    }

    #[test]
    fn test_pair_with_sentinel() {
        let data = [5, 6, 0, 7];
        let (b, e) = (View::begin(&data), Until(|x: &i32| *x == 0)).bounds();
        assert_eq!(distance(b, &e), 2);
    }

    #[test]
    fn test_mut_slice_bounds_are_slots() {
        let mut data = [1, 2];
        let (b, e) = (&mut data).bounds();
        assert_eq!(e.index() - b.index(), 2);
    }
}
