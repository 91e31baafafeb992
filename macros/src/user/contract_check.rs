//! `contract_check!` expansion

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::{generate_check, CheckList};

pub fn expand_contract_check(input: CheckList) -> TokenStream {
    // Reference each checked type first so imports used only here stay used.
    let type_refs = input.checks.iter().map(|c| {
        let ty = &c.ty;
        quote! { __use_type::<#ty>(::core::marker::PhantomData); }
    });
    let check_exprs = input.checks.iter().map(|c| generate_check(&c.expr, &c.ty));

    quote! {
        {
            fn __use_type<__T: ?Sized>(_: ::core::marker::PhantomData<__T>) {}
            #(#type_refs)*
            (#(#check_exprs)&&*)
        }
    }
}
