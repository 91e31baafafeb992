//! # Layer 4: Checked Operations
//!
//! The algorithms in [`algorithm`](crate::algorithm) trust their callers:
//! capacity, reachability and sortedness are preconditions. The functions
//! here take plain slices, validate those preconditions first and report a
//! [`RangeError`] instead of misbehaving.
//!
//! ```
//! use tola_ranges::checked;
//! use tola_ranges::error::RangeError;
//!
//! let mut buf = [1, 2, 3, 4, 5];
//! checked::shift_right(&mut buf, 3, 2).unwrap();
//! assert_eq!(buf[2..], [1, 2, 3]);
//!
//! let err = checked::shift_right(&mut buf, 3, 3).unwrap_err();
//! assert_eq!(err, RangeError::ShiftOutOfBounds { offset: 3, len: 5 });
//! ```

use crate::algorithm::{COPY_BACKWARD, MERGE_MOVE};
use crate::cursor::{as_cells, Slot};
use crate::error::{Input, RangeError};
pub use crate::error::Result;
use crate::functional::{Identity, Less, Relation};

/// Copies `src` into the last `src.len()` positions of `dst`.
///
/// Returns the index in `dst` where the copy starts.
pub fn copy_backward<T: Clone>(src: &[T], dst: &mut [T]) -> Result<usize> {
    ensure_capacity(src.len(), dst.len())?;
    let cells = as_cells(dst);
    let r = COPY_BACKWARD.sequence(src, Slot::end(cells));
    Ok(r.out.index())
}

/// Shifts the first `count` elements of `buf` right by `offset` positions.
///
/// Positions `[0, offset)` keep whatever they held before (the shifted-out
/// values where the regions do not overlap).
pub fn shift_right<T: Clone + Default>(buf: &mut [T], count: usize, offset: usize) -> Result<()> {
    let len = buf.len();
    match count.checked_add(offset) {
        Some(needed) if needed <= len => {}
        _ => {
            debug_event!(count, offset, len, "shift out of bounds");
            return Err(RangeError::ShiftOutOfBounds { offset, len });
        }
    }
    let cells = as_cells(buf);
    COPY_BACKWARD.cursors(Slot::begin(cells), Slot::at(cells, count), Slot::at(cells, count + offset));
    Ok(())
}

/// Merges two ascending slices into the front of `out`.
///
/// Returns the number of elements written. On success `first` and `second`
/// hold moved-from (`T::default()`) values.
pub fn merge_move<T>(first: &mut [T], second: &mut [T], out: &mut [T]) -> Result<usize>
where
    T: Default + PartialOrd,
{
    merge_move_by(first, second, out, Less)
}

/// [`merge_move`] under a caller-supplied strict weak ordering.
pub fn merge_move_by<T, C>(first: &mut [T], second: &mut [T], out: &mut [T], pred: C) -> Result<usize>
where
    T: Default,
    C: Relation<T, T>,
{
    let required = first.len() + second.len();
    ensure_capacity(required, out.len())?;
    ensure_sorted(first, &pred, Input::First)?;
    ensure_sorted(second, &pred, Input::Second)?;

    let cells = as_cells(out);
    let r = MERGE_MOVE.sequence_by(first, second, Slot::begin(cells), pred, Identity, Identity);
    Ok(r.out.index())
}

/// Removes every element satisfying `pred`, keeping the others in order.
///
/// Returns the number of elements removed.
#[cfg(feature = "alloc")]
pub fn erase_if<T, P>(vec: &mut alloc::vec::Vec<T>, pred: P) -> usize
where
    T: Default,
    P: crate::functional::Predicate<T>,
{
    let len = vec.len();
    let kept = crate::algorithm::remove_if(&mut *vec, pred).index();
    vec.truncate(kept);
    len - kept
}

fn ensure_capacity(required: usize, available: usize) -> Result<()> {
    if required > available {
        debug_event!(required, available, "insufficient output capacity");
        return Err(RangeError::InsufficientCapacity { required, available });
    }
    Ok(())
}

fn ensure_sorted<T, C: Relation<T, T>>(items: &[T], pred: &C, input: Input) -> Result<()> {
    let unordered = items.windows(2).position(|w| pred.holds(&w[1], &w[0]));
    match unordered {
        Some(at) => {
            let index = at + 1;
            debug_event!(%input, index, "unsorted merge input");
            Err(RangeError::Unordered { input, index })
        }
        None => Ok(()),
    }
}
