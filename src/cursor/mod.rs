//! # Layer 0: Cursors
//!
//! A cursor is a position inside a sequence. What a cursor can do is split
//! into small traits so every algorithm asks for exactly what it uses:
//!
//! ```text
//! Traversal                     Element access
//! -----------------------       ---------------------------
//! Incrementable  (step)         Readable     (read_with)
//!   ForwardCursor (+Clone, Eq)  Writable<T>  (write)
//!     BidirectionalCursor       IterMove     (take)
//! ```
//!
//! The end of a range is a [`Sentinel`], which may or may not be a cursor of
//! the same type. A [`Sequence`] is anything that yields a `(cursor, sentinel)`
//! pair: explicit cursor pairs, slices, arrays and vectors.
//!
//! ## Slice adapters
//!
//! - [`Slot`]: position in a `&[Cell<T>]`. Readable, writable and movable.
//!   Several slots may alias one buffer, which in-place algorithms need.
//! - [`View`]: position in a `&[T]`. Readable only.
//! - [`BackInserter`]: appends to a `Vec<T>` (requires `alloc`).

pub mod sentinel;
pub mod sequence;
pub mod slot;
pub mod view;
#[cfg(feature = "alloc")]
pub mod inserter;

pub use sentinel::{Sentinel, Until};
pub use sequence::Sequence;
pub use slot::{as_cells, Slot};
pub use view::View;
#[cfg(feature = "alloc")]
pub use inserter::{back_inserter, BackInserter};

// =============================================================================
// Traversal
// =============================================================================

/// A position that can move one step forward.
///
/// This is the only traversal an output position needs.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an incrementable position",
    label = "requires `Incrementable`",
    note = "output positions must be able to step forward"
)]
pub trait Incrementable {
    /// Moves to the next position.
    fn step(&mut self);
}

/// Multipass cursor: copies of a cursor observe the same positions and two
/// cursors into one sequence compare equal when they name the same position.
///
/// Implemented explicitly; being `Incrementable + Clone + PartialEq` is not
/// enough to promise multipass traversal.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a forward cursor",
    label = "requires `ForwardCursor`",
    note = "forward cursors are `Clone + PartialEq`, step forward and revisit positions"
)]
pub trait ForwardCursor: Incrementable + Clone + PartialEq {}

/// Forward cursor that can also step backward.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a bidirectional cursor",
    label = "requires `BidirectionalCursor`",
    note = "this algorithm walks the range from its end; the cursor must implement `step_back`"
)]
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves to the previous position.
    fn step_back(&mut self);
}

// =============================================================================
// Element Access
// =============================================================================

/// Cursor whose element can be inspected.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be read",
    label = "requires `Readable`"
)]
pub trait Readable {
    /// Element type at this position.
    type Item;

    /// Lends the element at this position to `f`.
    fn read_with<R>(&self, f: impl FnOnce(&Self::Item) -> R) -> R;
}

/// Cursor whose position can be assigned a `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be assigned a `{T}`",
    label = "requires `Writable<{T}>`"
)]
pub trait Writable<T> {
    /// Overwrites the element at this position.
    fn write(&mut self, value: T);
}

/// Cursor whose element can be moved out.
///
/// The position keeps a valid moved-from value afterwards.
#[diagnostic::on_unimplemented(
    message = "elements of `{Self}` cannot be moved out",
    label = "requires `IterMove`"
)]
pub trait IterMove: Readable {
    /// Moves the element out of this position.
    fn take(&self) -> Self::Item;
}

// =============================================================================
// Utilities
// =============================================================================

/// Returns the cursor at which `end` is reached, starting from `begin`.
#[inline]
pub fn next<C, S>(begin: C, end: &S) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
{
    end.locate(begin)
}

/// Number of steps from `begin` to `end`.
pub fn distance<C, S>(mut begin: C, end: &S) -> usize
where
    C: ForwardCursor,
    S: Sentinel<C>,
{
    let mut n = 0;
    while !end.is_end(&begin) {
        begin.step();
        n += 1;
    }
    n
}
