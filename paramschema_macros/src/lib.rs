//! Procedural macros for **paramschema**
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_crate::{crate_name, FoundCrate};
use proc_macro_error::{abort, proc_macro_error};
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Fields, FieldsNamed, FieldsUnnamed,
    GenericParam, Generics,
};

mod attrs;

use attrs::{docs, is_exported, RenameRule, SchemaAttrs, SerdeAttrs};

// ============================================================================
// REFLECT DERIVE MACRO
// ============================================================================

/// Derive `Reflect`, describing a struct's shape to the schema reflector.
///
/// Field annotations come from `#[schema(...)]` (`json`, `description`, `enum`,
/// `required`), falling back to the serde attributes and doc comments already
/// on the field.
#[proc_macro_error]
#[proc_macro_derive(Reflect, attributes(schema))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => generate_struct_info(&input, fields),
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                generate_newtype_info(&input, fields)
            }
            Fields::Unnamed(fields) => generate_tuple_struct_info(&input, fields),
            Fields::Unit => generate_unit_struct_info(&input),
        },
        Data::Enum(_) => {
            abort!(
                input.ident,
                "Enum schemas are not supported; use a String field with `#[schema(enum = \"...\")]`"
            );
        }
        Data::Union(_) => {
            abort!(input.ident, "Union schemas are not supported");
        }
    }
}

fn generate_struct_info(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream {
    let crate_path = get_crate_path();
    let rename_rule = RenameRule::from_container(&input.attrs);

    let field_infos = fields.named.iter().map(|field| {
        let Some(ident) = field.ident.as_ref() else {
            abort!(field, "expected a named field");
        };
        let ident_str = attrs::unraw(ident);
        let exported = is_exported(&field.vis);
        let ty = &field.ty;

        let schema = SchemaAttrs::parse(&field.attrs)
            .unwrap_or_else(|err| abort!(err.span(), "{}", err));
        let serde = SerdeAttrs::parse(&field.attrs);

        let mut tags = Vec::new();
        if let Some(json) = schema
            .json
            .or_else(|| serde.json_tag(&ident_str, rename_rule))
        {
            tags.push(("json", json));
        }
        let description = schema.description.or_else(|| {
            let doc = docs(&field.attrs);
            (!doc.is_empty()).then_some(doc)
        });
        if let Some(description) = description {
            tags.push(("description", description));
        }
        if let Some(values) = schema.enum_values {
            tags.push(("enum", values));
        }
        if let Some(required) = schema.required {
            tags.push(("required", required));
        }

        let tag_calls = tags.iter().map(|(key, value)| quote! { .tag(#key, #value) });

        quote! {
            #crate_path::Field::new(
                #ident_str,
                #exported,
                <#ty as #crate_path::Reflect>::type_info,
            )
            #(#tag_calls)*
        }
    });

    expand(
        input,
        &crate_path,
        quote! { #crate_path::Kind::Struct(::std::vec![#(#field_infos),*]) },
    )
}

fn generate_newtype_info(input: &DeriveInput, fields: &FieldsUnnamed) -> TokenStream {
    let crate_path = get_crate_path();
    let ty = &fields.unnamed[0].ty;

    expand(
        input,
        &crate_path,
        quote! { #crate_path::Kind::Indirect(<#ty as #crate_path::Reflect>::type_info) },
    )
}

fn generate_tuple_struct_info(input: &DeriveInput, fields: &FieldsUnnamed) -> TokenStream {
    let crate_path = get_crate_path();

    let elems = fields.unnamed.iter().map(|field| {
        let ty = &field.ty;
        quote! { <#ty as #crate_path::Reflect>::type_info as #crate_path::TypeRef }
    });

    expand(
        input,
        &crate_path,
        quote! { #crate_path::Kind::Tuple(::std::vec![#(#elems),*]) },
    )
}

fn generate_unit_struct_info(input: &DeriveInput) -> TokenStream {
    let crate_path = get_crate_path();

    expand(
        input,
        &crate_path,
        quote! { #crate_path::Kind::Struct(::std::vec::Vec::new()) },
    )
}

fn expand(input: &DeriveInput, crate_path: &TokenStream2, kind: TokenStream2) -> TokenStream {
    let name = &input.ident;
    let generics = add_trait_bounds(input.generics.clone(), crate_path);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics #crate_path::Reflect for #name #ty_generics #where_clause {
            fn type_info() -> #crate_path::TypeInfo {
                #crate_path::TypeInfo::of::<Self>(#kind)
            }
        }
    })
}

fn add_trait_bounds(mut generics: Generics, crate_path: &TokenStream2) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(parse_quote!(#crate_path::Reflect));
        }
    }
    generics
}

/// Path to the runtime crate as seen from the crate being expanded.
///
/// Resolves through the facade first so users only need one dependency. A crate
/// expanding into itself names itself by path (`extern crate self as ...`), which
/// also keeps its doctests and integration tests working.
fn get_crate_path() -> TokenStream2 {
    for candidate in ["paramschema", "paramschema_core"] {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => {
                let ident = Ident::new(candidate, Span::call_site());
                return quote!(::#ident);
            }
            Ok(FoundCrate::Name(name)) => {
                let ident = Ident::new(&name, Span::call_site());
                return quote!(::#ident);
            }
            Err(_) => continue,
        }
    }
    quote!(::paramschema)
}
