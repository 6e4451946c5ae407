//! Parsing of `#[argbind(...)]` helper attributes.

use heck::{ToKebabCase, ToSnakeCase};
use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Lit, LitStr};

/// Case conversion applied to field identifiers by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Kebab,
    Snake,
    Lower,
}

impl RenameRule {
    pub(crate) fn parse(s: &str, span: Span) -> syn::Result<Self> {
        match s {
            "kebab-case" => Ok(Self::Kebab),
            "snake_case" => Ok(Self::Snake),
            "lowercase" => Ok(Self::Lower),
            _ => Err(syn::Error::new(
                span,
                "rename_all must be \"kebab-case\", \"snake_case\" or \"lowercase\"",
            )),
        }
    }

    pub(crate) fn apply(self, ident: &str) -> String {
        match self {
            Self::Kebab => ident.to_kebab_case(),
            Self::Snake => ident.to_snake_case(),
            Self::Lower => ident.to_lowercase(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct StructAttrs {
    pub rename_all: Option<RenameRule>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct VariantAttrs {
    pub rename: Option<String>,
}

/// Iterate all `#[argbind(...)]` attributes once and apply a callback.
fn parse_argbind<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("argbind")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

fn rename_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let s = lit_str(meta, "rename")?;
    let value = s.value();
    if value.is_empty() || value.contains('=') || value.starts_with('-') {
        return Err(syn::Error::new(
            s.span(),
            "rename must be non-empty and may not start with '-' or contain '='",
        ));
    }
    Ok(value)
}

fn unknown(meta: &ParseNestedMeta) -> syn::Error {
    meta.error("unrecognised argbind attribute")
}

/// Extracts `#[argbind(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_argbind(attrs, |meta| {
        if meta.path.is_ident("rename_all") {
            let s = lit_str(meta, "rename_all")?;
            out.rename_all = Some(RenameRule::parse(&s.value(), s.span())?);
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}

/// Extracts `#[argbind(...)]` metadata applied to a struct field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_argbind(attrs, |meta| {
        if meta.path.is_ident("rename") {
            out.rename = Some(rename_value(meta)?);
            Ok(())
        } else if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}

/// Extracts `#[argbind(...)]` metadata applied to an enum variant.
pub(crate) fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs::default();
    parse_argbind(attrs, |meta| {
        if meta.path.is_ident("rename") {
            out.rename = Some(rename_value(meta)?);
            Ok(())
        } else {
            Err(unknown(meta))
        }
    })?;
    Ok(out)
}
