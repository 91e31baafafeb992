//! Stable merge of two sorted ranges, moving elements into an output.

use crate::contract::{IndirectRelation, IndirectlyMovable, MoveMergeable};
use crate::cursor::{ForwardCursor, Incrementable, Sentinel, Sequence};
use crate::dispatch::{enter, Shape};
use crate::functional::{Identity, Less};
use crate::tagged::{In1In2Out, InOut};

use super::move_range::move_range_impl;

dispatch_object! {
    /// Merges two ranges, each sorted by `pred` over its projection, into the
    /// positions starting at `out`.
    ///
    /// Elements are moved, so the inputs are left holding moved-from values.
    /// Equal keys keep their input order, with the first input's elements
    /// ahead of the second's. Returns the end of both inputs and one past the
    /// last position written.
    pub struct MergeMoveFn => MERGE_MOVE = "merge_move";
}

impl MergeMoveFn {
    #[inline]
    pub fn cursors<I0, S0, I1, S1, O>(
        self,
        begin0: I0,
        end0: S0,
        begin1: I1,
        end1: S1,
        out: O,
    ) -> In1In2Out<I0, I1, O>
    where
        I0: MoveMergeable<I1, O, Less>,
        S0: Sentinel<I0>,
        I1: ForwardCursor + IndirectlyMovable<O>,
        S1: Sentinel<I1>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Cursors);
        merge_move_impl(begin0, &end0, begin1, &end1, out, &Less, &Identity, &Identity)
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn cursors_by<I0, S0, I1, S1, O, C, P0, P1>(
        self,
        begin0: I0,
        end0: S0,
        begin1: I1,
        end1: S1,
        out: O,
        pred: C,
        proj0: P0,
        proj1: P1,
    ) -> In1In2Out<I0, I1, O>
    where
        I0: MoveMergeable<I1, O, C, P0, P1>,
        S0: Sentinel<I0>,
        I1: ForwardCursor + IndirectlyMovable<O>,
        S1: Sentinel<I1>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Cursors);
        merge_move_impl(begin0, &end0, begin1, &end1, out, &pred, &proj0, &proj1)
    }

    #[inline]
    pub fn sequence<R0, R1, O>(self, seq0: R0, seq1: R1, out: O) -> In1In2Out<R0::Cursor, R1::Cursor, O>
    where
        R0: Sequence,
        R1: Sequence,
        R0::Cursor: MoveMergeable<R1::Cursor, O, Less>,
        R1::Cursor: IndirectlyMovable<O>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Sequence);
        let (begin0, end0) = seq0.bounds();
        let (begin1, end1) = seq1.bounds();
        merge_move_impl(begin0, &end0, begin1, &end1, out, &Less, &Identity, &Identity)
    }

    #[inline]
    pub fn sequence_by<R0, R1, O, C, P0, P1>(
        self,
        seq0: R0,
        seq1: R1,
        out: O,
        pred: C,
        proj0: P0,
        proj1: P1,
    ) -> In1In2Out<R0::Cursor, R1::Cursor, O>
    where
        R0: Sequence,
        R1: Sequence,
        R0::Cursor: MoveMergeable<R1::Cursor, O, C, P0, P1>,
        R1::Cursor: IndirectlyMovable<O>,
        O: Incrementable,
    {
        enter::<Self>(Shape::Sequence);
        let (begin0, end0) = seq0.bounds();
        let (begin1, end1) = seq1.bounds();
        merge_move_impl(begin0, &end0, begin1, &end1, out, &pred, &proj0, &proj1)
    }
}

/// `MERGE_MOVE.sequence(seq0, seq1, out)`
#[inline]
pub fn merge_move<R0, R1, O>(seq0: R0, seq1: R1, out: O) -> In1In2Out<R0::Cursor, R1::Cursor, O>
where
    R0: Sequence,
    R1: Sequence,
    R0::Cursor: MoveMergeable<R1::Cursor, O, Less>,
    R1::Cursor: IndirectlyMovable<O>,
    O: Incrementable,
{
    MERGE_MOVE.sequence(seq0, seq1, out)
}

/// `MERGE_MOVE.sequence_by(seq0, seq1, out, pred, proj0, proj1)`
#[inline]
pub fn merge_move_by<R0, R1, O, C, P0, P1>(
    seq0: R0,
    seq1: R1,
    out: O,
    pred: C,
    proj0: P0,
    proj1: P1,
) -> In1In2Out<R0::Cursor, R1::Cursor, O>
where
    R0: Sequence,
    R1: Sequence,
    R0::Cursor: MoveMergeable<R1::Cursor, O, C, P0, P1>,
    R1::Cursor: IndirectlyMovable<O>,
    O: Incrementable,
{
    MERGE_MOVE.sequence_by(seq0, seq1, out, pred, proj0, proj1)
}

#[allow(clippy::too_many_arguments)]
fn merge_move_impl<I0, S0, I1, S1, O, C, P0, P1>(
    mut begin0: I0,
    end0: &S0,
    mut begin1: I1,
    end1: &S1,
    mut out: O,
    pred: &C,
    proj0: &P0,
    proj1: &P1,
) -> In1In2Out<I0, I1, O>
where
    I0: MoveMergeable<I1, O, C, P0, P1>,
    S0: Sentinel<I0>,
    I1: ForwardCursor + IndirectlyMovable<O>,
    S1: Sentinel<I1>,
    O: Incrementable,
{
    // Only a strictly smaller head of the second input goes first.
    while !end0.is_end(&begin0) && !end1.is_end(&begin1) {
        if begin0.yields_to(&begin1, pred, proj0, proj1) {
            begin1.move_into(&mut out);
            begin1.step();
        } else {
            begin0.move_into(&mut out);
            begin0.step();
        }
        out.step();
    }

    let InOut { input: in1, out } = move_range_impl(begin0, end0, out);
    let InOut { input: in2, out } = move_range_impl(begin1, end1, out);
    In1In2Out { in1, in2, out }
}
