use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitInt, Result, Type,
    parse::{Parse, ParseStream},
};

/// Record-type codes with a registered layout.
const RECORD_CODES: [u16; 6] = [900, 903, 905, 907, 909, 999];

pub(crate) fn expand_from_records(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromRecords` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromRecords` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(RecordField::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();

    for field in &fields {
        if !seen.insert(field.code.base10_parse::<u16>()?) {
            Err(Error::new_spanned(
                &field.code,
                "Record codes must be unique.",
            ))?;
        }
    }

    let cases = fields.iter().map(|RecordField { name, code, kind }| {
        let receiver = match kind {
            Collection::Vec => quote! {
                self.#name.push(Default::default());
                self.#name.last_mut().map(|r| r as _)
            },
            Collection::Option => quote! {
                Some(self.#name.insert(Default::default()))
            },
        };

        quote! { #code => { #receiver } }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl FromRecords for #name {
            fn add_record(&mut self, record: RecordType) -> Option<&mut dyn FromRecord> {
                match record.code() {
                    #(#cases)*
                    _ => None,
                }
            }
        }
    };

    Ok(expanded.into())
}

/// How a struct field holds the records it receives.
#[derive(Debug)]
enum Collection {
    /// Keep the last record received.
    Option,
    /// Keep every record received, in order.
    Vec,
}

#[derive(Debug)]
struct RecordField {
    name: Ident,
    code: LitInt,
    kind: Collection,
}

impl RecordField {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("record")) else {
            return Ok(None);
        };

        let RecordAttribute { code } = attr.meta.require_list()?.parse_args()?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        // Accept qualified paths such as `alloc::vec::Vec<T>`.
        let Some(segment) = path.path.segments.last() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let kind = if segment.ident == "Option" {
            Collection::Option
        } else if segment.ident == "Vec" {
            Collection::Vec
        } else {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        Ok(Some(Self { name, code, kind }))
    }
}

#[derive(Debug)]
struct RecordAttribute {
    code: LitInt,
}

impl Parse for RecordAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let code = input.parse::<LitInt>()?;

        if !RECORD_CODES.contains(&code.base10_parse::<u16>()?) {
            Err(Error::new_spanned(
                &code,
                "Record code must be one of 900, 903, 905, 907, 909 or 999.",
            ))?;
        }

        Ok(Self { code })
    }
}
