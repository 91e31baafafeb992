//! # Projections and Predicates
//!
//! Algorithms never compare raw elements. They compare *keys* produced by a
//! projection, using a caller-supplied predicate:
//!
//! ```text
//! element --Projection--> &Key --Predicate / Relation--> bool
//! ```
//!
//! Plain closures work everywhere:
//!
//! | Closure | Implements |
//! |---------|------------|
//! | `Fn(&T) -> K` | `Projection<T, Key = K>` |
//! | `Fn(&T) -> bool` | `Predicate<T>` |
//! | `Fn(&A, &B) -> bool` | `Relation<A, B>` |
//!
//! Annotate closure parameters (`|x: &i32| ...`); the traits are not `Fn`
//! bounds, so the compiler cannot infer them.
//!
//! Defaults are [`Identity`] for projections and [`Less`] for orderings.
//! A projection that borrows a field instead of computing a key is built with
//! [`member`].

use core::marker::PhantomData;

// =============================================================================
// Projection
// =============================================================================

/// Maps an element to the key that predicates see.
///
/// The key is lent to a continuation so projections can hand out either a
/// borrowed part of the element or a freshly computed value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot project elements of type `{T}`",
    label = "requires `Projection<{T}>`",
    note = "use `Identity`, a closure `Fn(&{T}) -> K`, or `member(|x| &x.field)`"
)]
pub trait Projection<T: ?Sized> {
    /// Key type handed to predicates.
    type Key: ?Sized;

    /// Projects `value` and lends the key to `f`.
    fn project_with<R>(&self, value: &T, f: impl FnOnce(&Self::Key) -> R) -> R;
}

/// The identity projection: the key is the element itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T: ?Sized> Projection<T> for Identity {
    type Key = T;

    #[inline(always)]
    fn project_with<R>(&self, value: &T, f: impl FnOnce(&T) -> R) -> R {
        f(value)
    }
}

impl<T: ?Sized, K, F> Projection<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline(always)]
    fn project_with<R>(&self, value: &T, f: impl FnOnce(&K) -> R) -> R {
        f(&self(value))
    }
}

/// Projection to a borrowed part of the element.
///
/// Built by [`member`].
pub struct Member<F, K: ?Sized> {
    get: F,
    _key: PhantomData<fn(&K)>,
}

impl<F: Clone, K: ?Sized> Clone for Member<F, K> {
    fn clone(&self) -> Self {
        Member { get: self.get.clone(), _key: PhantomData }
    }
}

impl<F: Copy, K: ?Sized> Copy for Member<F, K> {}

impl<F, K: ?Sized> core::fmt::Debug for Member<F, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Member")
    }
}

/// Wraps a field accessor as a projection.
///
/// ```
/// use tola_ranges::functional::{member, Projection};
///
/// struct Person { name: &'static str, age: u32 }
///
/// let by_age = member(|p: &Person| &p.age);
/// let p = Person { name: "ada", age: 36 };
/// assert_eq!(by_age.project_with(&p, |age| *age), 36);
/// # let _ = p.name;
/// ```
#[inline]
pub fn member<T: ?Sized, K: ?Sized, F>(get: F) -> Member<F, K>
where
    F: Fn(&T) -> &K,
{
    Member { get, _key: PhantomData }
}

impl<T: ?Sized, K: ?Sized, F> Projection<T> for Member<F, K>
where
    F: Fn(&T) -> &K,
{
    type Key = K;

    #[inline(always)]
    fn project_with<R>(&self, value: &T, f: impl FnOnce(&K) -> R) -> R {
        f((self.get)(value))
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Unary test over a key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot test values of type `{T}`",
    label = "requires `Predicate<{T}>`",
    note = "use a closure `Fn(&{T}) -> bool` with an annotated parameter"
)]
pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline(always)]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Binary test over two keys, typically a strict weak ordering.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot relate `{A}` to `{B}`",
    label = "requires `Relation<{A}, {B}>`",
    note = "use `Less`, `Greater`, or a closure `Fn(&{A}, &{B}) -> bool`"
)]
pub trait Relation<A: ?Sized, B: ?Sized = A> {
    fn holds(&self, a: &A, b: &B) -> bool;
}

impl<A: ?Sized, B: ?Sized, F> Relation<A, B> for F
where
    F: Fn(&A, &B) -> bool,
{
    #[inline(always)]
    fn holds(&self, a: &A, b: &B) -> bool {
        self(a, b)
    }
}

/// `a < b`. The default ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<A, B> Relation<A, B> for Less
where
    A: ?Sized + PartialOrd<B>,
    B: ?Sized,
{
    #[inline(always)]
    fn holds(&self, a: &A, b: &B) -> bool {
        a < b
    }
}

/// `a > b`. Orders descending inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<A, B> Relation<A, B> for Greater
where
    A: ?Sized + PartialOrd<B>,
    B: ?Sized,
{
    #[inline(always)]
    fn holds(&self, a: &A, b: &B) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Point {
        x: i32,
        label: &'static str,
    }

    #[test]
    fn test_identity_lends_element() {
        let p = Point { x: 7, label: "p" };
        let x = Identity.project_with(&p, |q: &Point| q.x);
        assert_eq!(x, 7);
    }

    #[test]
    fn test_closure_projection() {
        let p = Point { x: -3, label: "p" };
        let abs = |q: &Point| q.x.abs();
        assert_eq!(abs.project_with(&p, |k| *k), 3);
    }

    #[test]
    fn test_member_projection() {
        let p = Point { x: 1, label: "origin" };
        let label = member(|q: &Point| q.label);
        assert_eq!(label.project_with(&p, |k: &str| k.len()), 6);
    }

    #[test]
    fn test_orderings() {
        assert!(Less.holds(&1, &2));
        assert!(!Less.holds(&2, &2));
        assert!(Greater.holds(&3, &2));
        assert!(Less.holds("abc", "abd"));
    }

    #[test]
    fn test_closure_predicates() {
        let even = |x: &i32| x % 2 == 0;
        assert!(even.test(&4));
        assert!(!even.test(&5));

        let shorter = |a: &str, b: &str| a.len() < b.len();
        assert!(shorter.holds("ab", "abc"));
    }
}
