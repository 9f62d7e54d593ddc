use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Generics, Lit, LitStr, Path, Result};

/// Run `f` on every nested item of every `#[wire(...)]` attribute
pub fn for_each_wire_meta(
    attrs: &[Attribute],
    mut f: impl FnMut(ParseNestedMeta) -> Result<()>,
) -> Result<()> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("wire")) {
        attr.parse_nested_meta(&mut f)?;
    }
    Ok(())
}

/// `name = "..."`
pub fn parse_str(meta: &ParseNestedMeta) -> Result<LitStr> {
    meta.value()?.parse()
}

/// `with = "expr"`
pub fn parse_expr(meta: &ParseNestedMeta) -> Result<Expr> {
    parse_str(meta)?.parse()
}

/// `crate = "path"`
pub fn parse_path(meta: &ParseNestedMeta) -> Result<Path> {
    parse_str(meta)?.parse()
}

/// Default engine path
pub fn default_crate() -> Path {
    syn::parse_quote!(::lspwire_core)
}

/// Literal as a `Value` construction expression
pub fn value_of(krate: &Path, lit: &Lit) -> Result<TokenStream> {
    match lit {
        Lit::Str(s) => Ok(quote! { #krate::Value::from(#s) }),
        Lit::Int(n) => {
            let n: i64 = n.base10_parse()?;
            Ok(quote! { #krate::Value::Int(#n) })
        }
        Lit::Bool(b) => Ok(quote! { #krate::Value::Bool(#b) }),
        other => Err(syn::Error::new_spanned(
            other,
            "wire constants must be string, integer or boolean literals",
        )),
    }
}

pub fn reject_generics(generics: &Generics) -> Result<()> {
    if generics.params.is_empty() && generics.where_clause.is_none() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            generics,
            "lspwire derives do not support generic types; declare the codec by hand",
        ))
    }
}
