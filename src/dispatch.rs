//! # Layer 2: Dispatch Objects
//!
//! Every algorithm is one zero-sized, `Copy` value (`COPY_BACKWARD`,
//! `MERGE_MOVE`, ...) offering two call shapes that run the same body:
//!
//! ```text
//! ALGO.cursors(begin, end, ..)   Shape::Cursors   explicit positions
//! ALGO.sequence(seq, ..)         Shape::Sequence  seq.bounds() -> (begin, end)
//!                 \                   /
//!                  +-- one implementation over cursors --+
//! ```
//!
//! Which calls compile is decided by the contracts in the method bounds, never
//! by inspecting types at run time. Variants ending in `_by` / `_by_key` take
//! an explicit ordering or projection; the others use [`Less`] and
//! [`Identity`].
//!
//! [`Less`]: crate::functional::Less
//! [`Identity`]: crate::functional::Identity

use core::fmt;

/// A dispatch object.
pub trait Algorithm: Copy + Default + fmt::Debug {
    /// Name used in diagnostics and trace events.
    const NAME: &'static str;
}

/// Which call shape an invocation used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Explicit begin / end positions.
    Cursors,
    /// Whole sequences split by [`Sequence::bounds`](crate::cursor::Sequence::bounds).
    Sequence,
}

impl Shape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Cursors => "cursors",
            Shape::Sequence => "sequence",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records entry into `A` through `shape`.
#[inline(always)]
pub(crate) fn enter<A: Algorithm>(shape: Shape) {
    trace_event!(algorithm = A::NAME, shape = shape.as_str(), "dispatch");
    let _ = shape;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{CopyBackwardFn, MergeMoveFn, RemoveIfFn, COPY_BACKWARD};

    fn name_of<A: Algorithm>(_: A) -> &'static str {
        A::NAME
    }

    #[test]
    fn test_dispatch_objects_are_zero_sized() {
        assert_eq!(core::mem::size_of::<CopyBackwardFn>(), 0);
        assert_eq!(core::mem::size_of::<MergeMoveFn>(), 0);
        assert_eq!(core::mem::size_of::<RemoveIfFn>(), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(name_of(COPY_BACKWARD), "copy_backward");
        assert_eq!(name_of(MergeMoveFn), "merge_move");
        assert_eq!(Shape::Sequence.as_str(), "sequence");
    }
}
