//! # Layer 1: Capability Contracts
//!
//! Composite requirements built from the cursor and functional traits. Each
//! contract is one named trait with a blanket implementation, so "does `T`
//! satisfy `C`?" is answered by the trait solver and an unmet contract fails
//! the build with a message naming it.
//!
//! | Contract | Holds when |
//! |----------|------------|
//! | [`IndirectlyCopyable<O>`] | `Self: Readable`, `Item: Clone`, `O: Writable<Item>` |
//! | [`IndirectlyMovable<O>`] | `Self: IterMove`, `O: Writable<Item>` |
//! | [`Permutable`] | `Self: ForwardCursor + IndirectlyMovable<Self>` |
//! | [`IndirectPredicate<P, Proj>`] | `P: Predicate<Proj::Key>`, `Proj: Projection<Item>` |
//! | [`IndirectRelation<I1, C, P0, P1>`] | `C` relates `P1(*i1)` to `P0(*i0)` |
//! | [`MoveMergeable<I1, O, C, P0, P1>`] | both inputs forward and movable into `O`, plus `IndirectRelation<I1, C, P0, P1>` |
//! | [`RemovableIf<P, Proj>`] | `Permutable + IndirectPredicate<P, Proj>` |
//!
//! ```compile_fail
//! use tola_ranges::algorithm::COPY_BACKWARD;
//! use tola_ranges::cursor::View;
//!
//! let src = [1, 2, 3];
//! let dst = [0, 0, 0];
//! // `View` is read-only: `IndirectlyCopyable<View<i32>>` is not satisfied.
//! COPY_BACKWARD.cursors(View::begin(&src), View::end(&src), View::end(&dst));
//! ```

use crate::cursor::{ForwardCursor, IterMove, Readable, Writable};
use crate::functional::{Identity, Predicate, Projection, Relation};

// =============================================================================
// Element Transfer
// =============================================================================

/// The element at `Self` can be cloned into position `O`.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be copied into `{O}`",
    label = "requires `IndirectlyCopyable<{O}>`",
    note = "the source must be `Readable` with a `Clone` item and the destination `Writable` for that item"
)]
pub trait IndirectlyCopyable<O>: Readable {
    /// `*out = (*self).clone()`
    fn copy_into(&self, out: &mut O);
}

impl<I, O> IndirectlyCopyable<O> for I
where
    I: Readable,
    I::Item: Clone,
    O: Writable<I::Item>,
{
    #[inline]
    fn copy_into(&self, out: &mut O) {
        out.write(self.read_with(|value| value.clone()));
    }
}

/// The element at `Self` can be moved into position `O`.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be moved into `{O}`",
    label = "requires `IndirectlyMovable<{O}>`",
    note = "the source must implement `IterMove` and the destination `Writable` for its item"
)]
pub trait IndirectlyMovable<O>: IterMove {
    /// `*out = take(*self)`
    fn move_into(&self, out: &mut O);
}

impl<I, O> IndirectlyMovable<O> for I
where
    I: IterMove,
    O: Writable<I::Item>,
{
    #[inline]
    fn move_into(&self, out: &mut O) {
        out.write(self.take());
    }
}

/// Elements can be moved between positions of the same sequence.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not permutable",
    label = "requires `Permutable`",
    note = "in-place algorithms need a forward cursor that can move elements into positions of its own type"
)]
pub trait Permutable: ForwardCursor + IndirectlyMovable<Self> {}

impl<I> Permutable for I where I: ForwardCursor + IndirectlyMovable<I> {}

// =============================================================================
// Callables over Cursors
// =============================================================================

/// `P` accepts `Proj` applied to the element at `Self`.
#[diagnostic::on_unimplemented(
    message = "predicate `{P}` cannot test elements of `{Self}` projected by `{Proj}`",
    label = "requires `IndirectPredicate<{P}, {Proj}>`",
    note = "the predicate's parameter must match the projection's key type"
)]
pub trait IndirectPredicate<P, Proj = Identity>: Readable {
    /// `pred(proj(*self))`
    fn satisfies(&self, pred: &P, proj: &Proj) -> bool;
}

impl<I, P, Proj> IndirectPredicate<P, Proj> for I
where
    I: Readable,
    Proj: Projection<I::Item>,
    P: Predicate<Proj::Key>,
{
    #[inline]
    fn satisfies(&self, pred: &P, proj: &Proj) -> bool {
        self.read_with(|value| proj.project_with(value, |key| pred.test(key)))
    }
}

/// `C` orders the projected element at `I1` against the projected element at
/// `Self`.
#[diagnostic::on_unimplemented(
    message = "`{C}` cannot order elements of `{I1}` against elements of `{Self}`",
    label = "requires `IndirectRelation<{I1}, {C}, {P0}, {P1}>`",
    note = "the ordering must accept (key of `{I1}`, key of `{Self}`) after projection"
)]
pub trait IndirectRelation<I1, C, P0 = Identity, P1 = Identity>: Readable {
    /// `pred(proj1(*second), proj0(*self))`: the second input's head goes
    /// first.
    fn yields_to(&self, second: &I1, pred: &C, proj0: &P0, proj1: &P1) -> bool;
}

impl<I0, I1, C, P0, P1> IndirectRelation<I1, C, P0, P1> for I0
where
    I0: Readable,
    I1: Readable,
    P0: Projection<I0::Item>,
    P1: Projection<I1::Item>,
    C: Relation<P1::Key, P0::Key>,
{
    #[inline]
    fn yields_to(&self, second: &I1, pred: &C, proj0: &P0, proj1: &P1) -> bool {
        second.read_with(|b| {
            proj1.project_with(b, |kb| {
                self.read_with(|a| proj0.project_with(a, |ka| pred.holds(kb, ka)))
            })
        })
    }
}

// =============================================================================
// Algorithm Contracts
// =============================================================================

/// Both inputs are forward and movable into `O`, and `C` orders the projected
/// head of the second input against the projected head of the first.
///
/// Implemented on the first input's cursor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` and `{I1}` cannot be move-merged into `{O}` with `{C}`",
    label = "requires `MoveMergeable<{I1}, {O}, {C}, {P0}, {P1}>`",
    note = "both inputs must be forward cursors movable into the output, and the ordering must accept (second key, first key)"
)]
pub trait MoveMergeable<I1, O, C, P0 = Identity, P1 = Identity>:
    ForwardCursor + IndirectlyMovable<O> + IndirectRelation<I1, C, P0, P1>
{
}

impl<I0, I1, O, C, P0, P1> MoveMergeable<I1, O, C, P0, P1> for I0
where
    I0: ForwardCursor + IndirectlyMovable<O> + IndirectRelation<I1, C, P0, P1>,
    I1: ForwardCursor + IndirectlyMovable<O>,
{
}

/// Forward, permutable, and `P` accepts projected elements.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be removed in place by `{P}`",
    label = "requires `RemovableIf<{P}, {Proj}>`",
    note = "the cursor must be `Permutable` and the predicate must accept its projected elements"
)]
pub trait RemovableIf<P, Proj = Identity>: Permutable + IndirectPredicate<P, Proj> {}

impl<I, P, Proj> RemovableIf<P, Proj> for I where I: Permutable + IndirectPredicate<P, Proj> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{as_cells, Slot, View};
    use crate::functional::Less;

    fn requires_mergeable<I0, I1, O>()
    where
        I0: MoveMergeable<I1, O, Less>,
    {
    }

    #[test]
    fn test_copy_into() {
        let src = [1, 2, 3];
        let mut dst = [0; 3];
        let cells = as_cells(&mut dst);
        let mut out = Slot::at(cells, 1);
        View::at(&src, 2).copy_into(&mut out);
        assert_eq!(dst, [0, 3, 0]);
    }

    #[test]
    fn test_move_into_leaves_default() {
        let mut buf = [7, 8];
        let cells = as_cells(&mut buf);
        let mut out = Slot::at(cells, 0);
        Slot::at(cells, 1).move_into(&mut out);
        assert_eq!(buf, [8, 0]);
    }

    #[test]
    fn test_satisfies_with_projection() {
        let words = ["apple", "fig"];
        let short = |n: &usize| *n < 4;
        let len = |w: &&str| w.len();
        assert!(!View::at(&words, 0).satisfies(&short, &len));
        assert!(View::at(&words, 1).satisfies(&short, &len));
    }

    #[test]
    fn test_yields_to_reads_second_input_first() {
        let mut a = [3];
        let mut b = [2];
        let ca = as_cells(&mut a);
        let cb = as_cells(&mut b);
        let first = Slot::at(ca, 0);
        let second = Slot::at(cb, 0);
        assert!(first.yields_to(&second, &Less, &Identity, &Identity));
        assert!(!second.yields_to(&first, &Less, &Identity, &Identity));
        requires_mergeable::<Slot<'_, i32>, Slot<'_, i32>, Slot<'_, i32>>();
    }

    #[test]
    fn test_yields_to_across_views_with_projections() {
        let names = ["bob", "al"];
        let lens = [2usize];
        let by_len = |s: &&str| s.len();
        let first = View::at(&names, 0);
        let second = View::at(&lens, 0);
        assert!(first.yields_to(&second, &Less, &by_len, &Identity));
        assert!(!View::at(&names, 1).yields_to(&second, &Less, &by_len, &Identity));
    }
}
