//! Procedural macros for tola-ranges
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Tagged)]` | struct | Role access to result fields via `#[tag(..)]` |
//! | `contract_check!` | - | `bool` answer to "does this type meet these contracts?" |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Tagged)]
//! struct Found<I> {
//!     #[tag(In)]
//!     hit: I,
//! }
//!
//! assert!(contract_check!(Slot<'static, i32>: Permutable & !Sequence));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Derive role access for a result struct.
///
/// Each field marked `#[tag(Role)]` gets an `impl Tagged<Role>`. The crate's
/// roles (`In`, `In1`, `In2`, `Out`) can be named bare; any other role is a
/// path to a user type. The struct also converts into a tuple of all of its
/// fields in declaration order.
///
/// # Usage
/// ```ignore
/// #[derive(Tagged)]
/// struct Split<I, O> {
///     #[tag(In)]
///     rest: I,
///     #[tag(Out)]
///     written: O,
/// }
/// ```
#[proc_macro_derive(Tagged, attributes(tag))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::tagged::expand_derive_tagged(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Check whether types satisfy contracts, with boolean expression support.
///
/// Returns a `bool` computed at compile time from the trait solver.
///
/// # Syntax: `contract_check!(Type: Expr, ...)`
///
/// `Expr` combines contracts with `&`, `|`, `!` and parentheses. Several
/// checks may be listed; the result is true when all of them hold.
///
/// ```ignore
/// use tola_ranges::contract_check;
/// use tola_ranges::cursor::{Slot, View};
///
/// assert!(contract_check!(View<'static, i32>: BidirectionalCursor & !IterMove));
/// assert!(contract_check!(Slot<'static, i32>: Permutable | Readable));
/// assert!(contract_check!(View<'static, i32>: IndirectlyCopyable<Slot<'static, i32>>));
///
/// // Traits outside the crate are probed directly
/// assert!(contract_check!(View<'static, i32>: core::fmt::Debug));
/// ```
///
/// Only concrete types give meaningful answers; inside generic code use a
/// trait bound.
#[proc_macro]
pub fn contract_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::CheckList);
    user::contract_check::expand_contract_check(input).into()
}
