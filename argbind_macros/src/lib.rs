//! Procedural macros for `argbind`.
//!
//! `#[derive(BindSettings)]` emits a `const` table of field descriptors for
//! a struct with named fields, so binding needs no runtime reflection.
//! `#[derive(SettingValue)]` emits a case-insensitive parser for a fieldless
//! enum. Both accept `#[argbind(...)]` helper attributes.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parse;
mod settings;
mod value;

/// Derive macro for `argbind::BindSettings`.
///
/// Struct attribute: `rename_all = "kebab-case" | "snake_case" | "lowercase"`.
/// Field attributes: `rename = "..."` and `skip`.
#[proc_macro_derive(BindSettings, attributes(argbind))]
pub fn derive_bind_settings(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    settings::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `argbind::SettingValue` on fieldless enums.
///
/// Variant attribute: `rename = "..."`. Without it the variant identifier
/// is the accepted spelling, matched ignoring ASCII case.
#[proc_macro_derive(SettingValue, attributes(argbind))]
pub fn derive_setting_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    value::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
