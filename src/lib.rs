#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Vec-backed cursors and checked::erase_if in no_std
// - detect: Detect<T> constants and contract_check!
// - tracing: dispatch and validation events

//! # tola-ranges
//!
//! Contract-constrained sequence algorithms.
//!
//! **Generic algorithms whose requirements are named traits.**
//!
//! ## Architecture
//!
//! An algorithm states what it needs from its cursors as a *contract*: a
//! named trait such as [`Permutable`](contract::Permutable) or
//! [`MoveMergeable`](contract::MoveMergeable). Contracts are composed from
//! small traversal and element-access traits, checked entirely by the trait
//! solver, and an unmet contract fails the build with a message naming it.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Cursors & Callables                                     |
//! |  - Incrementable, ForwardCursor, BidirectionalCursor              |
//! |  - Readable, Writable, IterMove, Sentinel, Sequence               |
//! |  - Projection, Predicate, Relation (Identity, Less)               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Contracts                                               |
//! |  - IndirectlyCopyable, IndirectlyMovable, Permutable              |
//! |  - IndirectPredicate, IndirectRelation                             |
//! |  - MoveMergeable, RemovableIf                                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch, Tagged Results, Detection                     |
//! |  - zero-sized dispatch objects, two call shapes                   |
//! |  - InOut / In1In2Out, #[derive(Tagged)], contract_check!          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Algorithms          Layer 4: Checked Operations         |
//! |  - copy_backward, merge_move  - validated slice front-ends        |
//! |  - remove_if, find_if, ...    - RangeError                        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_ranges::prelude::*;
//!
//! // Shape 2: whole sequences.
//! let mut a = [1, 3, 5];
//! let mut b = [2, 3, 6];
//! let mut out = [0; 6];
//! let cells = as_cells(&mut out);
//! let r = MERGE_MOVE.sequence(&mut a, &mut b, Slot::begin(cells));
//! assert_eq!(r.out.index(), 6);
//! assert_eq!(out, [1, 2, 3, 3, 5, 6]);
//!
//! // Shape 1: explicit cursors. Both shapes run the same algorithm.
//! let mut v = [1, 2, 3, 4, 5, 6];
//! let cells = as_cells(&mut v);
//! let end = REMOVE_IF.cursors(Slot::begin(cells), Slot::end(cells), |x: &i32| x % 2 == 0);
//! assert_eq!(end.index(), 3);
//! assert_eq!(v[..3], [1, 3, 5]);
//! ```

// Allow `::tola_ranges` to work inside the crate itself
extern crate self as tola_ranges;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the detection macros
pub use paste;

// Internal macros (dispatch_object!, trace_event!, debug_event!)
#[macro_use]
mod syntax_macros;

// =============================================================================
// Layer 0: Cursors & Callables
// =============================================================================
pub mod cursor;
pub mod functional;

// =============================================================================
// Layer 1: Contracts
// =============================================================================
pub mod contract;

// =============================================================================
// Layer 2: Dispatch, Tagged Results, Detection
// =============================================================================
pub mod dispatch;
pub mod tagged;

#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 3: Algorithms
// =============================================================================
pub mod algorithm;

// =============================================================================
// Layer 4: Checked Operations
// =============================================================================
pub mod checked;
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use algorithm::{
    copy_backward, find_if, find_if_by_key, merge_move, merge_move_by, move_range, remove_if,
    remove_if_by_key, COPY_BACKWARD, FIND_IF, MERGE_MOVE, MOVE_RANGE, REMOVE_IF,
};
pub use error::{RangeError, Result};
pub use tagged::{In1In2Out, InOut, Tagged};

// Re-export proc-macros
#[cfg(feature = "detect")]
pub use macros::contract_check;

/// Common items for writing and calling algorithms.
pub mod prelude {
    pub use crate::algorithm::{COPY_BACKWARD, FIND_IF, MERGE_MOVE, MOVE_RANGE, REMOVE_IF};
    pub use crate::contract::{
        IndirectPredicate, IndirectRelation, IndirectlyCopyable, IndirectlyMovable, MoveMergeable,
        Permutable, RemovableIf,
    };
    pub use crate::cursor::{
        as_cells, BidirectionalCursor, ForwardCursor, Incrementable, IterMove, Readable, Sentinel,
        Sequence, Slot, Until, View, Writable,
    };
    #[cfg(feature = "alloc")]
    pub use crate::cursor::back_inserter;
    pub use crate::functional::{member, Greater, Identity, Less, Predicate, Projection, Relation};
    pub use crate::tagged::{tag, In1In2Out, InOut, Tagged};
    #[cfg(feature = "detect")]
    pub use macros::contract_check;
}
