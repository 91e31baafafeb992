//! Inherent-const fallback machinery.
//!
//! For each contract `C`:
//! 1. a fallback trait `CFallback` with `const IS_C: bool = false`,
//!    implemented for every `Detect<X>`;
//! 2. an inherent `const IS_C: bool = true` on `Detect<X>` where `X: C`.
//!
//! Resolving `Detect::<Concrete>::IS_C` picks the inherent constant when its
//! bound holds and the trait constant otherwise. The fallback traits must be
//! in scope (`use tola_ranges::detect::fallback::*`).

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

macro_rules! impl_detect {
    // Contract on a `(Source, Output)` pair.
    (pair $($Trait:ident),* $(,)?) => {$(
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] {
                const [<IS_ $Trait:snake:upper>]: bool = false;
            }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<I, O> Detect<(I, O)>
            where
                I: $Trait<O>,
            {
                pub const [<IS_ $Trait:snake:upper>]: bool = true;
            }
        }
    )*};
    ($($Trait:ident),* $(,)?) => {$(
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] {
                const [<IS_ $Trait:snake:upper>]: bool = false;
            }
            impl<T> [<$Trait Fallback>] for Detect<T> {}
            impl<T: $Trait> Detect<T> {
                pub const [<IS_ $Trait:snake:upper>]: bool = true;
            }
        }
    )*};
}

/// Fallback traits. Glob-import to make the `false` constants resolvable.
pub mod fallback {
    use super::Detect;
    use crate::contract::{IndirectlyCopyable, IndirectlyMovable, Permutable};
    use crate::cursor::{BidirectionalCursor, ForwardCursor, Incrementable, IterMove, Readable, Sequence};

    impl_detect!(Incrementable, ForwardCursor, BidirectionalCursor, Readable, IterMove, Permutable, Sequence);
    impl_detect!(pair IndirectlyCopyable, IndirectlyMovable);
}
