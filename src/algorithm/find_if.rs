//! First element whose projection satisfies a predicate.
//!
//! Shared slices read through [`View`](crate::cursor::View) with no bound on
//! the element type. Mutable slices and `Vec`s read through
//! [`Slot`](crate::cursor::Slot), which lends the element out of its cell and
//! so needs `T: Default`.

use crate::contract::IndirectPredicate;
use crate::cursor::{ForwardCursor, Sentinel, Sequence};
use crate::dispatch::{enter, Shape};
use crate::functional::Identity;

dispatch_object! {
    /// Returns the first position in `[begin, end)` whose projected element
    /// satisfies the predicate, or the end position if none does.
    pub struct FindIfFn => FIND_IF = "find_if";
}

impl FindIfFn {
    #[inline]
    pub fn cursors<I, S, P>(self, begin: I, end: S, pred: P) -> I
    where
        I: ForwardCursor + IndirectPredicate<P>,
        S: Sentinel<I>,
    {
        enter::<Self>(Shape::Cursors);
        find_if_impl(begin, &end, &pred, &Identity)
    }

    #[inline]
    pub fn cursors_by_key<I, S, P, Proj>(self, begin: I, end: S, pred: P, proj: Proj) -> I
    where
        I: ForwardCursor + IndirectPredicate<P, Proj>,
        S: Sentinel<I>,
    {
        enter::<Self>(Shape::Cursors);
        find_if_impl(begin, &end, &pred, &proj)
    }

    #[inline]
    pub fn sequence<R, P>(self, seq: R, pred: P) -> R::Cursor
    where
        R: Sequence,
        R::Cursor: IndirectPredicate<P>,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        find_if_impl(begin, &end, &pred, &Identity)
    }

    #[inline]
    pub fn sequence_by_key<R, P, Proj>(self, seq: R, pred: P, proj: Proj) -> R::Cursor
    where
        R: Sequence,
        R::Cursor: IndirectPredicate<P, Proj>,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        find_if_impl(begin, &end, &pred, &proj)
    }
}

/// `FIND_IF.sequence(seq, pred)`
///
/// Over `&mut [T]` or `&mut Vec<T>` this needs `T: Default`; pass `&[T]` for
/// other element types.
#[inline]
pub fn find_if<R, P>(seq: R, pred: P) -> R::Cursor
where
    R: Sequence,
    R::Cursor: IndirectPredicate<P>,
{
    FIND_IF.sequence(seq, pred)
}

/// `FIND_IF.sequence_by_key(seq, pred, proj)`
#[inline]
pub fn find_if_by_key<R, P, Proj>(seq: R, pred: P, proj: Proj) -> R::Cursor
where
    R: Sequence,
    R::Cursor: IndirectPredicate<P, Proj>,
{
    FIND_IF.sequence_by_key(seq, pred, proj)
}

pub(crate) fn find_if_impl<I, S, P, Proj>(mut begin: I, end: &S, pred: &P, proj: &Proj) -> I
where
    I: ForwardCursor + IndirectPredicate<P, Proj>,
    S: Sentinel<I>,
{
    while !end.is_end(&begin) && !begin.satisfies(pred, proj) {
        begin.step();
    }
    begin
}
