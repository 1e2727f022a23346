//! # RESQML Derive
//!
//! Procedural macros for RESQML enumeration tables.
//!
//! This crate provides `#[derive(WireEnum)]`, which implements
//! `resqml_core::WireEnum`, `Display` and `FromStr` from per-variant wire
//! tokens.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use std::collections::HashSet;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives `WireEnum` for a fieldless enum.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, WireEnum)]
/// #[wire(type_name = "BoundaryRelation")]
/// pub enum BoundaryRelation {
///     #[wire(rename = "conformable")]
///     Conformable,
///     #[wire(rename = "unconformable below and above")]
///     UnconformableBelowAndAbove,
/// }
/// ```
///
/// Variants without `rename` use their identifier as the wire token; the enum
/// name is used when `type_name` is absent.
#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn derive_wire_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_wire_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_wire_enum(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "WireEnum can only be derived for enums",
        ));
    };

    let type_name = wire_attr(&input.attrs, "type_name")?.unwrap_or_else(|| name.to_string());

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut tokens = Vec::with_capacity(data.variants.len());
    let mut seen = HashSet::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "WireEnum variants cannot carry fields",
            ));
        }
        let token =
            wire_attr(&variant.attrs, "rename")?.unwrap_or_else(|| variant.ident.to_string());
        if !seen.insert(token.clone()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate wire token '{token}'"),
            ));
        }
        idents.push(&variant.ident);
        tokens.push(token);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::resqml_core::WireEnum for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            fn as_wire_str(&self) -> &'static str {
                match *self {
                    #(Self::#idents => #tokens,)*
                }
            }

            fn from_wire_str(value: &str) -> ::core::option::Option<Self> {
                match value {
                    #(#tokens => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::resqml_core::WireEnum::as_wire_str(self))
            }
        }

        impl #impl_generics ::core::str::FromStr for #name #ty_generics #where_clause {
            type Err = ::resqml_core::UnknownEnumerant;

            fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::resqml_core::WireEnum>::parse_wire(value)
            }
        }
    })
}

/// Reads `#[wire(key = "...")]`, rejecting any other key.
fn wire_attr(attrs: &[Attribute], key: &str) -> syn::Result<Option<String>> {
    let mut found = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("wire")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: LitStr = meta.value()?.parse()?;
                found = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error(format!("unsupported wire attribute, expected `{key}`")))
            }
        })?;
    }
    Ok(found)
}
