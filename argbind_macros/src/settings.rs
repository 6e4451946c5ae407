//! Expansion of `#[derive(BindSettings)]`.

use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use crate::parse::{parse_field_attrs, parse_struct_attrs};

/// One bound field: its logical name plus the generated setter.
struct BoundField {
    name: String,
    setter: TokenStream,
    entry: TokenStream,
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "BindSettings does not support generic structs",
        ));
    }
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "BindSettings can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "BindSettings requires named fields",
        ));
    };

    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let mut seen = BTreeSet::new();
    let mut bound = Vec::new();
    for field in &named.named {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let plain = field_ident.unraw().to_string();
        let name = attrs.rename.unwrap_or_else(|| {
            struct_attrs
                .rename_all
                .map_or_else(|| plain.clone(), |rule| rule.apply(&plain))
        });
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(syn::Error::new_spanned(
                field_ident,
                format!("logical name '{name}' is bound by more than one field"),
            ));
        }

        let ty = &field.ty;
        let setter_ident = format_ident!("__argbind_assign_{}", plain);
        let setter = quote! {
            fn #setter_ident(
                settings: &mut #ident,
                raw: ::core::option::Option<&str>,
            ) -> ::core::result::Result<(), ::argbind::ValueError> {
                settings.#field_ident = <#ty as ::argbind::SettingValue>::from_flag(raw)?;
                ::core::result::Result::Ok(())
            }
        };
        let entry = quote! {
            ::argbind::FieldDescriptor::new(
                #name,
                <#ty as ::argbind::SettingValue>::KIND,
                #setter_ident,
            )
        };
        bound.push(BoundField {
            name,
            setter,
            entry,
        });
    }

    let setters = bound.iter().map(|field| &field.setter);
    let entries = bound.iter().map(|field| &field.entry);
    let names = bound.iter().map(|field| field.name.as_str());
    let doc = format!(
        "Binds the logical names {}.",
        names.map(|name| format!("`{name}`")).collect::<Vec<_>>().join(", ")
    );
    Ok(quote! {
        impl ::argbind::BindSettings for #ident {
            #[doc = #doc]
            fn descriptor() -> ::argbind::SettingsDescriptor<Self> {
                #(#setters)*
                const FIELDS: &[::argbind::FieldDescriptor<#ident>] = &[#(#entries),*];
                ::argbind::SettingsDescriptor::new(FIELDS)
            }
        }
    })
}
