//! # Layer 3: Algorithms
//!
//! | Algorithm | Result | Needs |
//! |-----------|--------|-------|
//! | [`copy_backward`] | [`InOut`] | bidirectional input and output, `IndirectlyCopyable` |
//! | [`merge_move`] | [`In1In2Out`] | `MoveMergeable` |
//! | [`remove_if`] | cursor | `RemovableIf` |
//! | [`find_if`] | cursor | `IndirectPredicate` |
//! | [`move_range`] | [`InOut`] | `IndirectlyMovable` |
//!
//! Each algorithm is a dispatch object (see [`dispatch`](crate::dispatch))
//! plus a free function taking a [`Sequence`](crate::cursor::Sequence). The
//! free function accepts `(begin, end)` pairs as well, so callers do not have
//! to pick a shape.
//!
//! [`InOut`]: crate::tagged::InOut
//! [`In1In2Out`]: crate::tagged::In1In2Out

pub mod copy_backward;
pub mod find_if;
pub mod merge_move;
pub mod move_range;
pub mod remove_if;

pub use copy_backward::{copy_backward, CopyBackwardFn, COPY_BACKWARD};
pub use find_if::{find_if, find_if_by_key, FindIfFn, FIND_IF};
pub use merge_move::{merge_move, merge_move_by, MergeMoveFn, MERGE_MOVE};
pub use move_range::{move_range, MoveRangeFn, MOVE_RANGE};
pub use remove_if::{remove_if, remove_if_by_key, RemoveIfFn, REMOVE_IF};
