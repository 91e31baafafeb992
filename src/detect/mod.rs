//! # Layer 2: Contract Detection
//!
//! Answers "does this concrete type satisfy contract `C`?" as a `bool`
//! constant, for tests, assertions and the `contract_check!` macro.
//!
//! ```
//! use tola_ranges::cursor::{Slot, View};
//! use tola_ranges::detect::fallback::*;
//! use tola_ranges::detect::Detect;
//!
//! assert!(Detect::<View<'static, i32>>::IS_BIDIRECTIONAL_CURSOR);
//! assert!(!Detect::<View<'static, i32>>::IS_ITER_MOVE);
//! assert!(Detect::<(View<'static, i32>, Slot<'static, i32>)>::IS_INDIRECTLY_COPYABLE);
//! assert!(!Detect::<(View<'static, i32>, View<'static, i32>)>::IS_INDIRECTLY_COPYABLE);
//! ```
//!
//! Contracts with an output type parameter are detected on `(Source, Output)`
//! pairs.
//!
//! ## Limitation
//!
//! Detection only works on **concrete types** known at the use site. Inside
//! `fn foo<T>()` every constant resolves to the `false` fallback; write a
//! trait bound instead.

mod autoref;

pub use autoref::{fallback, Detect};
