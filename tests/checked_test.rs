//! Tests for the checked layer: validated front-ends and RangeError.

use tola_ranges::checked;
use tola_ranges::error::{Input, RangeError};
use tola_ranges::functional::Greater;

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn test_copy_backward_rejects_short_output() {
    let mut dst = [0; 2];
    let err = checked::copy_backward(&[1, 2, 3], &mut dst).unwrap_err();
    assert_eq!(err, RangeError::InsufficientCapacity { required: 3, available: 2 });
    assert_eq!(err.to_string(), "output holds 2 elements but 3 are written");
    assert_eq!(dst, [0, 0]);
}

#[test]
fn test_merge_rejects_short_output() {
    let mut out = [0; 3];
    let err = checked::merge_move(&mut [1, 2], &mut [3, 4], &mut out).unwrap_err();
    assert_eq!(err, RangeError::InsufficientCapacity { required: 4, available: 3 });
}

// =============================================================================
// Sortedness
// =============================================================================

#[test]
fn test_merge_reports_unsorted_input() {
    let mut a = [1, 2, 3];
    let mut b = [4, 6, 5];
    let mut out = [0; 6];
    let err = checked::merge_move(&mut a, &mut b, &mut out).unwrap_err();
    assert_eq!(err, RangeError::Unordered { input: Input::Second, index: 2 });
    assert_eq!(err.to_string(), "second input is not sorted: element 2 orders before element 1");
    assert_eq!(out, [0; 6]);
    assert_eq!(b, [4, 6, 5]);
}

#[test]
fn test_merge_accepts_equal_neighbours() {
    let mut a = [1, 1, 2];
    let mut b = [1];
    let mut out = [0; 4];
    assert_eq!(checked::merge_move(&mut a, &mut b, &mut out), Ok(4));
    assert_eq!(out, [1, 1, 1, 2]);
}

#[test]
fn test_merge_by_descending() {
    let mut a = [String::from("b"), String::from("a")];
    let mut b = [String::from("c")];
    let mut out = vec![String::new(); 4];
    assert_eq!(checked::merge_move_by(&mut a, &mut b, &mut out, Greater), Ok(3));
    assert_eq!(out, ["c", "b", "a", ""]);
}

// =============================================================================
// Shifting & Erasing
// =============================================================================

#[test]
fn test_shift_right() {
    let mut buf = [1, 2, 3, 4, 5];
    checked::shift_right(&mut buf, 3, 2).unwrap();
    assert_eq!(buf, [1, 2, 1, 2, 3]);

    let err = checked::shift_right(&mut buf, 2, 4).unwrap_err();
    assert_eq!(err, RangeError::ShiftOutOfBounds { offset: 4, len: 5 });
    assert_eq!(buf, [1, 2, 1, 2, 3]);
}

#[test]
fn test_erase_if() {
    let mut words = vec!["keep", "", "this", ""];
    assert_eq!(checked::erase_if(&mut words, |w: &&str| w.is_empty()), 2);
    assert_eq!(words, ["keep", "this"]);
}
