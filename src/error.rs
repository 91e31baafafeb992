//! Error types for the checked layer

use core::fmt;

use thiserror::Error;

/// Which input of a two-input operation an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    First,
    Second,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::First => f.write_str("first"),
            Input::Second => f.write_str("second"),
        }
    }
}

/// Rejected arguments of a [`checked`](crate::checked) operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The output region is shorter than what the operation writes
    #[error("output holds {available} elements but {required} are written")]
    InsufficientCapacity { required: usize, available: usize },

    /// A merge input is not sorted by the given ordering
    #[error("{input} input is not sorted: element {index} orders before element {}", .index.saturating_sub(1))]
    Unordered { input: Input, index: usize },

    /// A shift would move elements past the end of the buffer
    #[error("cannot shift by {offset} within a buffer of {len} elements")]
    ShiftOutOfBounds { offset: usize, len: usize },
}

/// Result type alias for checked operations
pub type Result<T> = core::result::Result<T, RangeError>;

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RangeError::InsufficientCapacity { required: 5, available: 3 };
        assert_eq!(e.to_string(), "output holds 3 elements but 5 are written");

        let e = RangeError::Unordered { input: Input::Second, index: 2 };
        assert_eq!(e.to_string(), "second input is not sorted: element 2 orders before element 1");

        let e = RangeError::ShiftOutOfBounds { offset: 4, len: 3 };
        assert_eq!(e.to_string(), "cannot shift by 4 within a buffer of 3 elements");
    }
}
