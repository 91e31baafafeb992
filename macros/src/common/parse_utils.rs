//! Common parsing utilities
//!
//! Shared parsing helpers for `contract_check!`.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Check Parsing: `Type: Expr`
// =============================================================================

/// Single type check: `Type: Expr`
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more comma-separated checks. A trailing comma is accepted.
pub struct CheckList {
    pub checks: Vec<TypeCheck>,
}

impl Parse for CheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let checks = Punctuated::<TypeCheck, Token![,]>::parse_terminated(input)?;
        if checks.is_empty() {
            return Err(input.error("expected at least one `Type: Contract` check"));
        }
        Ok(CheckList { checks: checks.into_iter().collect() })
    }
}
