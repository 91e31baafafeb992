//! Move every element of a range to an output, front to back.

use crate::contract::IndirectlyMovable;
use crate::cursor::{ForwardCursor, Incrementable, Sentinel, Sequence};
use crate::dispatch::{enter, Shape};
use crate::tagged::InOut;

dispatch_object! {
    /// Moves `[begin, end)` to the positions starting at `out`, in order.
    ///
    /// Returns the end of the input and one past the last position written.
    /// Moved-from input positions keep their moved-from value.
    pub struct MoveRangeFn => MOVE_RANGE = "move_range";
}

impl MoveRangeFn {
    #[inline]
    pub fn cursors<I, S, O>(self, begin: I, end: S, out: O) -> InOut<I, O>
    where
        I: ForwardCursor + IndirectlyMovable<O>,
        S: Sentinel<I>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Cursors);
        move_range_impl(begin, &end, out)
    }

    #[inline]
    pub fn sequence<R, O>(self, seq: R, out: O) -> InOut<R::Cursor, O>
    where
        R: Sequence,
        R::Cursor: IndirectlyMovable<O>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Sequence);
        let (begin, end) = seq.bounds();
        move_range_impl(begin, &end, out)
    }
}

/// `MOVE_RANGE.sequence(seq, out)`
#[inline]
pub fn move_range<R, O>(seq: R, out: O) -> InOut<R::Cursor, O>
where
    R: Sequence,
    R::Cursor: IndirectlyMovable<O>,
    O: Incrementable,
{
    MOVE_RANGE.sequence(seq, out)
}

pub(crate) fn move_range_impl<I, S, O>(mut begin: I, end: &S, mut out: O) -> InOut<I, O>
where
    I: ForwardCursor + IndirectlyMovable<O>,
    S: Sentinel<I>,
    O: Incrementable,
{
    while !end.is_end(&begin) {
        begin.move_into(&mut out);
        begin.step();
        out.step();
    }
    InOut { input: begin, out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{as_cells, Slot};

    #[test]
    fn test_moves_and_leaves_defaults() {
        let mut src = [String::from("a"), String::from("b")];
        let mut dst = [String::new(), String::new(), String::new()];
        let dst_cells = as_cells(&mut dst);
        let r = move_range(&mut src, Slot::at(dst_cells, 1));
        assert_eq!(r.input.index(), 2);
        assert_eq!(r.out.index(), 3);
        assert_eq!(dst, ["", "a", "b"]);
        assert_eq!(src, ["", ""]);
    }

    #[test]
    fn test_empty_input() {
        let mut src: [i32; 0] = [];
        let mut dst = [9];
        let cells = as_cells(&mut dst);
        let (b, e) = Slot::range(as_cells(&mut src));
        let r = MOVE_RANGE.cursors(b, e, Slot::begin(cells));
        assert_eq!(r.out.index(), 0);
        assert_eq!(dst, [9]);
    }
}
