use crate::attrs::{
    default_crate, for_each_wire_meta, parse_expr, parse_path, parse_str, reject_generics, value_of,
};
use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{
    parse_macro_input, Data, DeriveInput, Expr, Fields, GenericArgument, Lit, LitStr,
    PathArguments, Result, Type,
};

struct FieldSpec<'a> {
    ident: &'a syn::Ident,
    ty: &'a Type,
    key: LitStr,
    nullable: bool,
    required: bool,
    with: Option<Expr>,
}

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
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
    let mut constants: Vec<(LitStr, Lit)> = Vec::new();

    for_each_wire_meta(&input.attrs, |meta| {
        if meta.path.is_ident("name") {
            name = parse_str(&meta)?;
        } else if meta.path.is_ident("crate") {
            krate = parse_path(&meta)?;
        } else if meta.path.is_ident("constant") {
            let mut key = None;
            let mut value = None;
            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("key") {
                    key = Some(parse_str(&inner)?);
                } else if inner.path.is_ident("value") {
                    value = Some(inner.value()?.parse::<Lit>()?);
                } else {
                    return Err(inner.error("expected `key` or `value`"));
                }
                Ok(())
            })?;
            match (key, value) {
                (Some(key), Some(value)) => constants.push((key, value)),
                _ => return Err(meta.error("constant needs both `key` and `value`")),
            }
        } else {
            return Err(meta.error("unsupported record attribute"));
        }
        Ok(())
    })?;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let mut key = None;
        let mut nullable = false;
        let mut required = false;
        let mut with = None;

        for_each_wire_meta(&field.attrs, |meta| {
            if meta.path.is_ident("key") {
                key = Some(parse_str(&meta)?);
            } else if meta.path.is_ident("nullable") {
                nullable = true;
            } else if meta.path.is_ident("required") {
                required = true;
            } else if meta.path.is_ident("with") {
                with = Some(parse_expr(&meta)?);
            } else {
                return Err(meta.error("unsupported field attribute"));
            }
            Ok(())
        })?;

        let key = key.ok_or_else(|| {
            syn::Error::new_spanned(
                field_ident,
                "every record field needs an explicit #[wire(key = \"...\")]",
            )
        })?;

        fields.push(FieldSpec {
            ident: field_ident,
            ty: &field.ty,
            key,
            nullable,
            required,
            with,
        });
    }

    let mut seen = HashSet::new();
    let declared = constants.iter().map(|(key, _)| key).chain(fields.iter().map(|field| &field.key));
    for key in declared {
        if !seen.insert(key.value()) {
            return Err(syn::Error::new_spanned(
                key,
                format!("wire key `{}` is declared twice", key.value()),
            ));
        }
    }

    let constant_calls = constants
        .iter()
        .map(|(key, value)| {
            let value = value_of(&krate, value)?;
            Ok(quote! { .constant(#key, #value) })
        })
        .collect::<Result<Vec<_>>>()?;

    let field_calls = fields
        .iter()
        .map(|field| field_call(&krate, ident, field))
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        impl #krate::Wire for #ident {
            type Codec = &'static #krate::RecordCodec<#ident>;

            fn codec() -> Self::Codec {
                static CODEC: ::std::sync::LazyLock<#krate::RecordCodec<#ident>> =
                    ::std::sync::LazyLock::new(|| {
                        #krate::RecordCodec::builder(#name)
                            #(#constant_calls)*
                            #(#field_calls)*
                            .build()
                    });
                &*CODEC
            }
        }
    })
}

fn field_call(
    krate: &syn::Path,
    owner: &syn::Ident,
    field: &FieldSpec<'_>,
) -> Result<proc_macro2::TokenStream> {
    let FieldSpec {
        ident,
        ty,
        key,
        nullable,
        required,
        with,
    } = field;
    let get = quote! { |record: &#owner| &record.#ident };
    let get_mut = quote! { |record: &mut #owner| &mut record.#ident };

    if *nullable && *required {
        return Err(syn::Error::new_spanned(
            key,
            "`required` already writes null for None; drop `nullable`",
        ));
    }

    match option_inner(ty) {
        Some(_) if *required => {
            let codec = match with {
                Some(expr) => quote! { #krate::OptionalCodec::new(#expr) },
                None => quote! { <#ty as #krate::Wire>::codec() },
            };
            Ok(quote! { .field(#key, #codec, #get, #get_mut) })
        }
        Some(inner) => {
            let codec = match with {
                Some(expr) => quote! { #expr },
                None => quote! { <#inner as #krate::Wire>::codec() },
            };
            let method = if *nullable {
                quote! { nullable }
            } else {
                quote! { optional }
            };
            Ok(quote! { .#method(#key, #codec, #get, #get_mut) })
        }
        None if *nullable || *required => Err(syn::Error::new_spanned(
            ty,
            if *nullable {
                "#[wire(nullable)] requires an Option<T> field"
            } else {
                "#[wire(required)] requires an Option<T> field"
            },
        )),
        None => {
            let codec = match with {
                Some(expr) => quote! { #expr },
                None => quote! { <#ty as #krate::Wire>::codec() },
            };
            Ok(quote! { .field(#key, #codec, #get, #get_mut) })
        }
    }
}

/// `T` when `ty` is spelled `Option<T>`
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(_) => panic!("expected the derive to be rejected"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_expands_fields_in_order() {
        let input: DeriveInput = parse_quote! {
            #[wire(constant(key = "kind", value = "create"))]
            struct CreateFile {
                #[wire(key = "uri")]
                uri: String,
                #[wire(key = "options")]
                options: Option<CreateFileOptions>,
            }
        };
        let tokens = expand(&input).unwrap().to_string().replace(' ', "");
        let constant = tokens.find(".constant(\"kind\"").unwrap();
        let uri = tokens.find(".field(\"uri\"").unwrap();
        let options = tokens.find(".optional(\"options\"").unwrap();
        assert!(constant < uri && uri < options);
    }

    #[test]
    fn test_duplicate_field_key() {
        let input: DeriveInput = parse_quote! {
            struct Point {
                #[wire(key = "x")]
                a: i64,
                #[wire(key = "x")]
                b: Option<i64>,
            }
        };
        assert_eq!(expand_err(input), "wire key `x` is declared twice");
    }

    #[test]
    fn test_field_key_shadowing_constant() {
        let input: DeriveInput = parse_quote! {
            #[wire(constant(key = "kind", value = "delete"))]
            struct DeleteFile {
                #[wire(key = "kind")]
                kind: String,
            }
        };
        assert_eq!(expand_err(input), "wire key `kind` is declared twice");
    }

    #[test]
    fn test_missing_key() {
        let input: DeriveInput = parse_quote! {
            struct Position {
                line: u32,
            }
        };
        assert!(expand_err(input).contains("explicit #[wire(key"));
    }

    #[test]
    fn test_required_option_is_a_plain_field() {
        let input: DeriveInput = parse_quote! {
            struct Response {
                #[wire(key = "id", required)]
                id: Option<RequestId>,
            }
        };
        let tokens = expand(&input).unwrap().to_string().replace(' ', "");
        assert!(tokens.contains(".field(\"id\",<Option<RequestId>as::lspwire_core::Wire>::codec()"));
    }

    #[test]
    fn test_required_and_nullable_conflict() {
        let input: DeriveInput = parse_quote! {
            struct Response {
                #[wire(key = "id", required, nullable)]
                id: Option<RequestId>,
            }
        };
        assert!(expand_err(input).starts_with("`required` already writes null"));
    }

    #[test]
    fn test_nullable_requires_option() {
        let input: DeriveInput = parse_quote! {
            struct Versioned {
                #[wire(key = "version", nullable)]
                version: i32,
            }
        };
        assert_eq!(expand_err(input), "#[wire(nullable)] requires an Option<T> field");
    }
}
