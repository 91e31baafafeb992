//! `#[derive(Tagged)]` expansion
//!
//! For every field carrying `#[tag(Role)]`:
//!
//! ```ignore
//! impl<..> ::tola_ranges::tagged::Tagged<Role> for Name<..> {
//!     type Value = FieldTy;
//!     fn get(&self) -> &FieldTy { &self.field }
//!     fn into_value(self) -> FieldTy { self.field }
//! }
//! ```
//!
//! plus `From<Name<..>> for (Field0Ty, Field1Ty, ..)` in declaration order.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{spanned::Spanned, Data, DeriveInput, Fields, Index, Member, Path, Type};

/// Roles defined by the crate, usable by bare name.
const BUILTIN_TAGS: &[&str] = &["In", "In1", "In2", "Out"];

struct TaggedField {
    member: Member,
    ty: Type,
    tag: Option<TokenStream>,
}

pub fn expand_derive_tagged(input: DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "#[derive(Tagged)] only supports structs",
            ));
        }
    };

    let fields = collect_fields(fields)?;
    check_unique_tags(&fields)?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let tagged_impls = fields.iter().filter_map(|f| {
        let tag = f.tag.as_ref()?;
        let member = &f.member;
        let ty = &f.ty;
        Some(quote! {
            impl #impl_generics ::tola_ranges::tagged::Tagged<#tag> for #name #ty_generics #where_clause {
                type Value = #ty;

                #[inline]
                fn get(&self) -> &#ty {
                    &self.#member
                }

                #[inline]
                fn into_value(self) -> #ty {
                    self.#member
                }
            }
        })
    });

    let tuple_impl = if fields.is_empty() {
        quote! {}
    } else {
        let tys = fields.iter().map(|f| &f.ty);
        let members = fields.iter().map(|f| &f.member);
        quote! {
            impl #impl_generics ::core::convert::From<#name #ty_generics> for (#(#tys,)*) #where_clause {
                #[inline]
                fn from(value: #name #ty_generics) -> Self {
                    (#(value.#members,)*)
                }
            }
        }
    };

    Ok(quote! {
        #(#tagged_impls)*
        #tuple_impl
    })
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<TaggedField>> {
    let mut out = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };

        let mut tag = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("tag")) {
            if tag.is_some() {
                return Err(syn::Error::new(attr.span(), "a field can play only one role"));
            }
            let path: Path = attr.parse_args()?;
            tag = Some(resolve_tag(&path));
        }

        out.push(TaggedField { member, ty: field.ty.clone(), tag });
    }
    Ok(out)
}

fn resolve_tag(path: &Path) -> TokenStream {
    match path.get_ident() {
        Some(ident) if BUILTIN_TAGS.contains(&ident.to_string().as_str()) => {
            quote! { ::tola_ranges::tagged::tag::#ident }
        }
        _ => path.to_token_stream(),
    }
}

fn check_unique_tags(fields: &[TaggedField]) -> syn::Result<()> {
    let mut seen: Vec<String> = Vec::new();
    for field in fields {
        let Some(tag) = &field.tag else { continue };
        let key = tag.to_string();
        if seen.contains(&key) {
            return Err(syn::Error::new(
                field.ty.span(),
                format!("role `{}` is tagged on more than one field", key.replace(' ', "")),
            ));
        }
        seen.push(key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_one_impl_per_tag() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair<I, O> {
                #[tag(In)]
                input: I,
                #[tag(Out)]
                out: O,
                extra: u8,
            }
        };
        let out = expand_derive_tagged(input).unwrap().to_string();
        assert_eq!(out.matches("Tagged <").count(), 2);
        assert!(out.contains("tagged :: tag :: In >"));
        assert!(out.contains("From < Pair < I , O > >"));
    }

    #[test]
    fn test_rejects_duplicate_roles() {
        let input: DeriveInput = syn::parse_quote! {
            struct Twice(#[tag(Out)] u8, #[tag(Out)] u8);
        };
        let err = expand_derive_tagged(input).unwrap_err();
        assert!(err.to_string().contains("more than one field"));
    }

    #[test]
    fn test_rejects_enums() {
        let input: DeriveInput = syn::parse_quote! {
            enum E { A }
        };
        assert!(expand_derive_tagged(input).is_err());
    }

    #[test]
    fn test_custom_role_path_kept() {
        let input: DeriveInput = syn::parse_quote! {
            struct Found(#[tag(roles::Hit)] usize);
        };
        let out = expand_derive_tagged(input).unwrap().to_string();
        assert!(out.contains("Tagged < roles :: Hit >"));
    }
}
