//! Copy a range to the region ending at an output position, last element
//! first.
//!
//! Walking backward makes the copy safe when the output region overlaps the
//! input from the right, which is how a buffer's prefix is shifted toward its
//! end:
//!
//! ```
//! use tola_ranges::algorithm::COPY_BACKWARD;
//! use tola_ranges::cursor::{as_cells, Slot};
//!
//! let mut buf = [1, 2, 3, 4, 5];
//! let cells = as_cells(&mut buf);
//! let r = COPY_BACKWARD.cursors(Slot::at(cells, 0), Slot::at(cells, 3), Slot::end(cells));
//! assert_eq!(r.input.index(), 3);
//! assert_eq!(r.out.index(), 2);
//! assert_eq!(buf, [1, 2, 1, 2, 3]);
//! ```

use crate::contract::IndirectlyCopyable;
use crate::cursor::{BidirectionalCursor, Sentinel, Sequence};
use crate::dispatch::{enter, Shape};
use crate::tagged::InOut;

dispatch_object! {
    /// Copies `[begin, end)` into the `n` positions just before `out`, where
    /// `n` is the input's length.
    ///
    /// Returns the input's end position and the start of the written region.
    pub struct CopyBackwardFn => COPY_BACKWARD = "copy_backward";
}

impl CopyBackwardFn {
    #[inline]
    pub fn cursors<I, S, O>(self, begin: I, end: S, out: O) -> InOut<I, O>
    where
        I: BidirectionalCursor + IndirectlyCopyable<O>,
        S: Sentinel<I>,
        O: BidirectionalCursor,
    {
        enter::<Self>(Shape::Cursors);
        copy_backward_impl(begin, &end, out)
    }

    #[inline]
    pub fn sequence<R, O>(self, seq: R, out: O) -> InOut<R::Cursor, O>
    where
        R: Sequence,
        R::Cursor: BidirectionalCursor + IndirectlyCopyable<O>,
        O: BidirectionalCursor,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        copy_backward_impl(begin, &end, out)
    }
}

/// `COPY_BACKWARD.sequence(seq, out)`
#[inline]
pub fn copy_backward<R, O>(seq: R, out: O) -> InOut<R::Cursor, O>
where
    R: Sequence,
    R::Cursor: BidirectionalCursor + IndirectlyCopyable<O>,
    O: BidirectionalCursor,
{
    COPY_BACKWARD.sequence(seq, out)
}

pub(crate) fn copy_backward_impl<I, S, O>(begin: I, end: &S, mut out: O) -> InOut<I, O>
where
    I: BidirectionalCursor + IndirectlyCopyable<O>,
    S: Sentinel<I>,
    O: BidirectionalCursor,
{
    // A sentinel that is not a cursor has to be walked to first.
    let last = end.locate(begin.clone());
    let mut i = last.clone();
    while i != begin {
        i.step_back();
        out.step_back();
        i.copy_into(&mut out);
    }
    InOut { input: last, out }
}
