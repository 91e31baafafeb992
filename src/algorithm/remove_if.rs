//! In-place compaction: keep the elements a predicate rejects.
//!
//! The sequence is not shortened. Everything after the returned position is
//! valid but unspecified and should be truncated or ignored by the caller.
//! With [`Slot`](crate::cursor::Slot) cursors that tail holds either
//! moved-from `T::default()` values or stale elements.
//!
//! Over `&mut [T]`, `&mut [T; N]` and `&mut Vec<T>` the element type must be
//! `Default`: slots read and move by taking the value out of its cell. Types
//! without a `Default` can be wrapped in `Option<T>`.
//!
//! ```
//! use tola_ranges::algorithm::remove_if;
//!
//! let mut v = vec![1, 2, 3, 4, 5, 6];
//! let new_end = remove_if(&mut v, |x: &i32| x % 2 == 0).index();
//! v.truncate(new_end);
//! assert_eq!(v, [1, 3, 5]);
//! ```

use crate::contract::RemovableIf;
use crate::cursor::{Sentinel, Sequence};
use crate::dispatch::{enter, Shape};
use crate::functional::Identity;

use super::find_if::find_if_impl;

dispatch_object! {
    /// Moves the elements of `[begin, end)` that do not satisfy the
    /// predicate to the front, in their original order, and returns the new
    /// logical end.
    pub struct RemoveIfFn => REMOVE_IF = "remove_if";
}

impl RemoveIfFn {
    #[inline]
    pub fn cursors<I, S, P>(self, begin: I, end: S, pred: P) -> I
    where
        I: RemovableIf<P>,
        S: Sentinel<I>,
    {
        enter::<Self>(Shape::Cursors);
        remove_if_impl(begin, &end, &pred, &Identity)
    }

    #[inline]
    pub fn cursors_by_key<I, S, P, Proj>(self, begin: I, end: S, pred: P, proj: Proj) -> I
    where
        I: RemovableIf<P, Proj>,
        S: Sentinel<I>,
    {
        enter::<Self>(Shape::Cursors);
        remove_if_impl(begin, &end, &pred, &proj)
    }

    #[inline]
    pub fn sequence<R, P>(self, seq: R, pred: P) -> R::Cursor
    where
        R: Sequence,
        R::Cursor: RemovableIf<P>,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        remove_if_impl(begin, &end, &pred, &Identity)
    }

    #[inline]
    pub fn sequence_by_key<R, P, Proj>(self, seq: R, pred: P, proj: Proj) -> R::Cursor
    where
        R: Sequence,
        R::Cursor: RemovableIf<P, Proj>,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        remove_if_impl(begin, &end, &pred, &proj)
    }
}

/// `REMOVE_IF.sequence(seq, pred)`
///
/// Slice and `Vec` sequences need `T: Default`.
#[inline]
pub fn remove_if<R, P>(seq: R, pred: P) -> R::Cursor
where
    R: Sequence,
    R::Cursor: RemovableIf<P>,
{
    REMOVE_IF.sequence(seq, pred)
}

/// `REMOVE_IF.sequence_by_key(seq, pred, proj)`
///
/// Slice and `Vec` sequences need `T: Default`.
#[inline]
pub fn remove_if_by_key<R, P, Proj>(seq: R, pred: P, proj: Proj) -> R::Cursor
where
    R: Sequence,
    R::Cursor: RemovableIf<P, Proj>,
{
    REMOVE_IF.sequence_by_key(seq, pred, proj)
}

fn remove_if_impl<I, S, P, Proj>(begin: I, end: &S, pred: &P, proj: &Proj) -> I
where
    I: RemovableIf<P, Proj>,
    S: Sentinel<I>,
{
    let mut first = find_if_impl(begin, end, pred, proj);
    if end.is_end(&first) {
        trace_event!(algorithm = "remove_if", "no element matched");
        return first;
    }

    let mut i = first.clone();
    i.step();
    while !end.is_end(&i) {
        if !i.satisfies(pred, proj) {
            i.move_into(&mut first);
            first.step();
        }
        i.step();
    }
    first
}
