//! # Layer 2: Tagged Results
//!
//! Algorithms that report several positions return a struct with one named
//! field per *role*. Roles are marker types in [`tag`]; the [`Tagged`] trait
//! reaches a field by role, so generic code can ask for "the output cursor"
//! of any result without knowing which algorithm produced it.
//!
//! ```
//! use tola_ranges::tagged::{tag, In1In2Out, InOut, Tagged};
//!
//! fn output_of<R: Tagged<tag::Out>>(result: R) -> R::Value {
//!     result.into_value()
//! }
//!
//! assert_eq!(output_of(InOut { input: 3, out: 7 }), 7);
//! assert_eq!(output_of(In1In2Out { in1: 1, in2: 2, out: 9 }), 9);
//! ```
//!
//! New result types get role access with `#[derive(Tagged)]`:
//!
//! ```
//! use tola_ranges::tagged::{tag, Tagged};
//!
//! #[derive(Tagged)]
//! struct Split<I, O> {
//!     #[tag(In)]
//!     rest: I,
//!     #[tag(Out)]
//!     written: O,
//! }
//!
//! let s = Split { rest: 'r', written: 'w' };
//! assert_eq!(*Tagged::<tag::In>::get(&s), 'r');
//! assert_eq!(<(char, char)>::from(s), ('r', 'w'));
//! ```

pub use macros::Tagged;

/// Role markers.
pub mod tag {
    /// The (only) input's final position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct In;

    /// The first input's final position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct In1;

    /// The second input's final position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct In2;

    /// The output's final position.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Out;
}

/// Access to the field playing role `Tag`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no field tagged `{Tag}`",
    label = "requires `Tagged<{Tag}>`",
    note = "mark the field with `#[tag(..)]` under `#[derive(Tagged)]`"
)]
pub trait Tagged<Tag> {
    type Value;

    fn get(&self) -> &Self::Value;

    fn into_value(self) -> Self::Value;
}

/// Final input and output positions of a single-input algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Tagged)]
pub struct InOut<I, O> {
    #[tag(In)]
    pub input: I,
    #[tag(Out)]
    pub out: O,
}

/// Final positions of a two-input algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Tagged)]
pub struct In1In2Out<I0, I1, O> {
    #[tag(In1)]
    pub in1: I0,
    #[tag(In2)]
    pub in2: I1,
    #[tag(Out)]
    pub out: O,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of<R: Tagged<tag::Out>>(r: &R) -> &R::Value {
        r.get()
    }

    #[test]
    fn test_role_access() {
        let r = InOut { input: 'a', out: 'b' };
        assert_eq!(*Tagged::<tag::In>::get(&r), 'a');
        assert_eq!(*out_of(&r), 'b');
    }

    #[test]
    fn test_shared_role_across_results() {
        let single = InOut { input: 0u8, out: 10u8 };
        let double = In1In2Out { in1: 1u8, in2: 2u8, out: 20u8 };
        assert_eq!(out_of(&single) + out_of(&double), 30);
    }

    #[test]
    fn test_into_tuple() {
        let r = In1In2Out { in1: 1, in2: 2, out: 3 };
        let (a, b, c): (i32, i32, i32) = r.into();
        assert_eq!((a, b, c), (1, 2, 3));
    }
}
