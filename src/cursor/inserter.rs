//! Output position that appends to a vector.

use alloc::vec::Vec;

use super::{Incrementable, Writable};

/// Appends every written value to a `Vec<T>`.
///
/// Stepping is a no-op: each write lands after the previous one. Not a
/// forward cursor, so it only fits algorithms that write sequentially
/// (`merge_move`, `move_range`).
#[derive(Debug)]
pub struct BackInserter<'a, T> {
    target: &'a mut Vec<T>,
}

/// Output cursor appending to `target`.
#[inline]
pub fn back_inserter<T>(target: &mut Vec<T>) -> BackInserter<'_, T> {
    BackInserter { target }
}

impl<T> BackInserter<'_, T> {
    /// Number of elements in the target so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

impl<T> Incrementable for BackInserter<'_, T> {
    #[inline(always)]
    fn step(&mut self) {}
}

impl<T> Writable<T> for BackInserter<'_, T> {
    #[inline]
    fn write(&mut self, value: T) {
        self.target.push(value);
    }
}
