// Boolean expression parsing and evaluation for contract checks

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    GenericArgument, Path, PathArguments, Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Contract(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Contract(ty))
    }
}

// =============================================================================
// Known Contracts
// =============================================================================

/// Contracts answered by `Detect<T>` on the checked type itself.
const UNARY_CONTRACTS: &[&str] = &[
    "Incrementable",
    "ForwardCursor",
    "BidirectionalCursor",
    "Readable",
    "IterMove",
    "Permutable",
    "Sequence",
];

/// Contracts answered by `Detect<(T, O)>`, written `Contract<O>`.
const PAIR_CONTRACTS: &[&str] = &["IndirectlyCopyable", "IndirectlyMovable"];

/// How a single contract in the expression is answered.
enum Route<'a> {
    Unary(String),
    Pair(String, &'a Type),
    Probe,
}

fn route(contract: &Type) -> Route<'_> {
    let Type::Path(path) = contract else {
        return Route::Probe;
    };
    if path.qself.is_some() || !names_crate_contract(&path.path) {
        return Route::Probe;
    }
    let Some(last) = path.path.segments.last() else {
        return Route::Probe;
    };
    let name = last.ident.to_string();

    match &last.arguments {
        PathArguments::None if UNARY_CONTRACTS.contains(&name.as_str()) => Route::Unary(name),
        PathArguments::AngleBracketed(args) if PAIR_CONTRACTS.contains(&name.as_str()) => {
            match args.args.first() {
                Some(GenericArgument::Type(out)) if args.args.len() == 1 => Route::Pair(name, out),
                _ => Route::Probe,
            }
        }
        _ => Route::Probe,
    }
}

/// A bare name, or a path rooted at `tola_ranges`. Same-named traits from
/// other crates are left to the probe.
fn names_crate_contract(path: &Path) -> bool {
    let segments = &path.segments;
    if segments.len() == 1 {
        return path.leading_colon.is_none();
    }
    segments
        .first()
        .is_some_and(|first| first.ident == "tola_ranges" && first.arguments.is_none())
}

/// Convert trait name to SCREAMING_SNAKE_CASE for IS_* constant.
/// e.g., "ForwardCursor" -> "FORWARD_CURSOR"
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

// =============================================================================
// Check Generation
// =============================================================================

/// Generate the `bool` expression for `ty: expr`.
///
/// Crate contracts read the `Detect` constants; any other trait gets an
/// inline probe. Both only answer correctly for concrete types.
pub fn generate_check(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Contract(contract) => generate_single_check(contract, ty),
        BoolExpr::And(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_check(lhs, ty);
            let r = generate_check(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_check(operand, ty);
            quote! { (!#o) }
        }
    }
}

fn generate_single_check(contract: &Type, ty: &Type) -> TokenStream {
    match route(contract) {
        Route::Unary(name) => {
            let konst = format_ident!("IS_{}", to_screaming_snake_case(&name));
            quote! {
                {
                    #[allow(unused_imports)]
                    use ::tola_ranges::detect::fallback::*;
                    ::tola_ranges::detect::Detect::<#ty>::#konst
                }
            }
        }
        Route::Pair(name, out) => {
            let konst = format_ident!("IS_{}", to_screaming_snake_case(&name));
            quote! {
                {
                    #[allow(unused_imports)]
                    use ::tola_ranges::detect::fallback::*;
                    ::tola_ranges::detect::Detect::<(#ty, #out)>::#konst
                }
            }
        }
        Route::Probe => generate_probe(contract, ty),
    }
}

/// Generate a single probe check for one trait
fn generate_probe(contract: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #contract> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
