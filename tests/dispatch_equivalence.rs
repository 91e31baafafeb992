//! Both call shapes of every dispatch object run the same algorithm.

use tola_ranges::cursor::{as_cells, Slot, View};
use tola_ranges::dispatch::{Algorithm, Shape};
use tola_ranges::functional::{Identity, Less};
use tola_ranges::prelude::*;

// =============================================================================
// Shape Equivalence
// =============================================================================

#[test]
fn test_copy_backward_shapes_agree() {
    let src = [1, 2, 3];
    let mut x = [0; 4];
    let mut y = [0; 4];

    let cx = as_cells(&mut x);
    let rx = COPY_BACKWARD.cursors(View::begin(&src), View::end(&src), Slot::end(cx));
    let cy = as_cells(&mut y);
    let ry = COPY_BACKWARD.sequence(&src, Slot::end(cy));

    assert_eq!(rx.input.index(), ry.input.index());
    assert_eq!(rx.out.index(), ry.out.index());
    assert_eq!(x, y);
}

#[test]
fn test_merge_move_shapes_agree() {
    let (mut a0, mut b0) = ([1, 4, 9], [2, 4, 8]);
    let (mut a1, mut b1) = (a0, b0);
    let mut x = [0; 6];
    let mut y = [0; 6];

    let (ab, ae) = Slot::range(as_cells(&mut a0));
    let (bb, be) = Slot::range(as_cells(&mut b0));
    let cx = as_cells(&mut x);
    let rx = MERGE_MOVE.cursors_by(ab, ae, bb, be, Slot::begin(cx), Less, Identity, Identity);

    let cy = as_cells(&mut y);
    let ry = MERGE_MOVE.sequence(&mut a1, &mut b1, Slot::begin(cy));

    assert_eq!(rx.out.index(), ry.out.index());
    assert_eq!(x, y);
}

#[test]
fn test_remove_if_shapes_agree() {
    let mut x = [3, 6, 9, 12, 15];
    let mut y = x;
    let divisible = |n: &i32| n % 6 == 0;

    let cx = as_cells(&mut x);
    let kx = REMOVE_IF.cursors(Slot::begin(cx), Slot::end(cx), divisible).index();
    let ky = REMOVE_IF.sequence(&mut y, divisible).index();

    assert_eq!(kx, ky);
    assert_eq!(x[..kx], y[..ky]);
}

#[test]
fn test_pair_is_a_sequence() {
    let data = [4, 8, 15, 16];
    let via_pair = FIND_IF.sequence((View::begin(&data), View::end(&data)), |x: &i32| x % 2 == 1);
    let via_slice = FIND_IF.sequence(&data, |x: &i32| x % 2 == 1);
    assert_eq!(via_pair, via_slice);
}

// =============================================================================
// Dispatch Objects
// =============================================================================

fn name_of<A: Algorithm>(_: A) -> &'static str {
    A::NAME
}

#[test]
fn test_names_and_copy() {
    let algo = REMOVE_IF;
    let copy = algo;
    assert_eq!(algo, copy);
    assert_eq!(name_of(COPY_BACKWARD), "copy_backward");
    assert_eq!(name_of(MERGE_MOVE), "merge_move");
    assert_eq!(name_of(REMOVE_IF), "remove_if");
    assert_eq!(name_of(FIND_IF), "find_if");
    assert_eq!(name_of(MOVE_RANGE), "move_range");
    assert_eq!(Shape::Cursors.to_string(), "cursors");
}
