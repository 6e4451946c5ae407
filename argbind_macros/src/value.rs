//! Expansion of `#[derive(SettingValue)]` for fieldless enums.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use crate::parse::parse_variant_attrs;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SettingValue does not support generic enums",
        ));
    }
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "SettingValue can only be derived for fieldless enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "SettingValue requires at least one variant",
        ));
    }

    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(data.variants.len());
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "SettingValue variants cannot carry data",
            ));
        }
        let attrs = parse_variant_attrs(&variant.attrs)?;
        let name = attrs
            .rename
            .unwrap_or_else(|| variant.ident.unraw().to_string());
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("member '{name}' clashes with another variant ignoring case"),
            ));
        }
        names.push(name);
        variants.push(&variant.ident);
    }

    Ok(quote! {
        impl ::argbind::SettingValue for #ident {
            const KIND: ::argbind::ValueKind = ::argbind::ValueKind::Enumeration {
                members: &[#(#names),*],
            };

            fn from_flag(
                raw: ::core::option::Option<&str>,
            ) -> ::core::result::Result<Self, ::argbind::ValueError> {
                const MEMBERS: &[&str] = &[#(#names),*];
                let value = raw.unwrap_or_default();
                #(
                    if value.eq_ignore_ascii_case(#names) {
                        return ::core::result::Result::Ok(Self::#variants);
                    }
                )*
                ::core::result::Result::Err(::argbind::ValueError::new(value, MEMBERS))
            }
        }
    })
}
