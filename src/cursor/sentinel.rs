//! End-of-range markers.
//!
//! Any forward cursor ends a range of its own type. Other sentinels only
//! answer "is this cursor at the end?", so turning them into an end cursor
//! costs a forward walk.

use super::{ForwardCursor, Incrementable, Readable};
use crate::functional::Predicate;

/// Marks the end of a range of `C` cursors.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot end a range of `{C}`",
    label = "requires `Sentinel<{C}>`",
    note = "use a cursor of the same type as the range's start, or a sentinel such as `Until`"
)]
pub trait Sentinel<C> {
    /// Whether `cursor` has reached the end.
    fn is_end(&self, cursor: &C) -> bool;

    /// The end position as a cursor, found by walking from `begin`.
    fn locate(&self, mut begin: C) -> C
    where
        C: Incrementable,
    {
        while !self.is_end(&begin) {
            begin.step();
        }
        begin
    }
}

impl<C: ForwardCursor> Sentinel<C> for C {
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        self == cursor
    }

    #[inline]
    fn locate(&self, _begin: C) -> C {
        self.clone()
    }
}

/// Ends a range at the first element satisfying a predicate.
///
/// The matching element is not part of the range (think of a NUL terminator).
#[derive(Clone, Copy, Debug, Default)]
pub struct Until<P>(pub P);

impl<C, P> Sentinel<C> for Until<P>
where
    C: ForwardCursor + Readable,
    P: Predicate<C::Item>,
{
    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor.read_with(|value| self.0.test(value))
    }
}
