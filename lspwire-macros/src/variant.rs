use crate::attrs::{default_crate, for_each_wire_meta, parse_expr, parse_path, parse_str, reject_generics};
use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Result};

#[derive(Clone, Copy, PartialEq)]
enum Strategy {
    Untagged,
    Tagged,
}

pub fn derive_variant_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream> {
    reject_generics(&input.generics)?;

    let ident = &input.ident;
    let mut name = LitStr::new(&ident.to_string(), ident.span());
    let mut krate = default_crate();
    let mut strategy = None;
    let mut tag: Option<LitStr> = None;
    let mut payload: Option<LitStr> = None;

    for_each_wire_meta(&input.attrs, |meta| {
        if meta.path.is_ident("untagged") || meta.path.is_ident("tagged") {
            let chosen = if meta.path.is_ident("untagged") {
                Strategy::Untagged
            } else {
                Strategy::Tagged
            };
            if strategy.replace(chosen).is_some_and(|previous| previous != chosen) {
                return Err(meta.error("choose either `untagged` or `tagged`, not both"));
            }
        } else if meta.path.is_ident("tag") {
            tag = Some(parse_str(&meta)?);
        } else if meta.path.is_ident("payload") {
            payload = Some(parse_str(&meta)?);
        } else if meta.path.is_ident("name") {
            name = parse_str(&meta)?;
        } else if meta.path.is_ident("crate") {
            krate = parse_path(&meta)?;
        } else {
            return Err(meta.error("unsupported variant attribute"));
        }
        Ok(())
    })?;

    let strategy = strategy.ok_or_else(|| {
        syn::Error::new_spanned(
            ident,
            "Variant needs #[wire(untagged)] or #[wire(tagged)]",
        )
    })?;
    if strategy == Strategy::Untagged && (tag.is_some() || payload.is_some()) {
        return Err(syn::Error::new_spanned(
            ident,
            "`tag` and `payload` only apply to tagged variants",
        ));
    }

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Variant can only be derived for enums",
            ))
        }
    };

    let mut alternatives = Vec::with_capacity(data.variants.len());
    let mut names = HashSet::new();
    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let inner = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "each variant must wrap exactly one type, e.g. `Edit(TextEdit)`",
                ))
            }
        };

        let mut alternative_name = None;
        let mut with = None;
        for_each_wire_meta(&variant.attrs, |meta| {
            if meta.path.is_ident("name") {
                alternative_name = Some(parse_str(&meta)?);
            } else if meta.path.is_ident("with") {
                with = Some(parse_expr(&meta)?);
            } else {
                return Err(meta.error("unsupported alternative attribute"));
            }
            Ok(())
        })?;

        let alternative_name = alternative_name.ok_or_else(|| {
            syn::Error::new_spanned(
                variant_ident,
                "every variant needs an explicit #[wire(name = \"...\")]",
            )
        })?;
        if !names.insert(alternative_name.value()) {
            return Err(syn::Error::new_spanned(
                &alternative_name,
                format!("alternative `{}` is declared twice", alternative_name.value()),
            ));
        }
        let codec = match with {
            Some(expr) => quote! { #expr },
            None => quote! { <#inner as #krate::Wire>::codec() },
        };

        alternatives.push(quote! {
            #krate::Alternative::new(
                #alternative_name,
                #codec,
                #ident::#variant_ident,
                |value: &#ident| match value {
                    #ident::#variant_ident(inner) => ::std::option::Option::Some(inner),
                    #[allow(unreachable_patterns)]
                    _ => ::std::option::Option::None,
                },
            )
        });
    }

    let (codec_ty, construct) = match strategy {
        Strategy::Untagged => (
            quote! { #krate::UntaggedVariantCodec<#ident> },
            quote! { #krate::UntaggedVariantCodec::new(#name, ::std::vec![#(#alternatives),*]) },
        ),
        Strategy::Tagged => {
            let tag = tag.map(|tag| quote! { .with_tag_field(#tag) });
            let payload = payload.map(|payload| quote! { .with_payload_field(#payload) });
            (
                quote! { #krate::TaggedVariantCodec<#ident> },
                quote! {
                    #krate::TaggedVariantCodec::new(#name, ::std::vec![#(#alternatives),*])
                        #tag
                        #payload
                },
            )
        }
    };

    Ok(quote! {
        impl #krate::Wire for #ident {
            type Codec = &'static #codec_ty;

            fn codec() -> Self::Codec {
                static CODEC: ::std::sync::LazyLock<#codec_ty> =
                    ::std::sync::LazyLock::new(|| #construct);
                &*CODEC
            }
        }
    })
}
