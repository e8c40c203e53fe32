use std::collections::HashMap;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Expr, ExprClosure, Field, Fields, GenericArgument, Ident, LitStr, Pat,
    PathArguments, Result, Token, Type,
    parse::{Parse, ParseStream},
    spanned::Spanned,
};

pub(crate) fn expand_from_record(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new(
            input.span(),
            "`FromRecord` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    type Case = (Ident, Option<Handler>);
    let mut field_methods: HashMap<Primitive, Vec<(LitStr, Case)>> = HashMap::new();
    let mut lineno_method: Option<Case> = None;

    for field in fields {
        let assignment = (field.name, field.handler);

        match field.identifier {
            FieldIdentifier::Name(name) => {
                let cases = field_methods.entry(field.primitive).or_default();

                if cases.iter().any(|(other, _)| other.value() == name.value()) {
                    Err(Error::new(name.span(), "Field names must be unique."))?;
                }

                cases.push((name, assignment));
            }
            FieldIdentifier::LineNumber => {
                let span = assignment.0.span();
                let existing = lineno_method.replace(assignment);

                if existing.is_some() {
                    Err(Error::new(
                        span,
                        "Only one field may receive the line number.",
                    ))?;
                }
            }
        }
    }

    let field_methods = field_methods.into_iter().map(|(primitive, fields)| {
        let cases = fields.into_iter().map(|(name, (ident, handler))| {
            let assignment = if let Some(Handler { ty, acc, val, body }) = handler {
                quote! {
                    (|#acc: &mut #ty, #val| {#body})(&mut self.#ident, value)
                }
            } else {
                quote! {
                    self.#ident = Some(::core::convert::Into::into(value))
                }
            };

            quote! { #name => { #assignment } }
        });

        let signature = match primitive {
            Primitive::Text => quote! { fn add_text(&mut self, field: &'static str, value: &str) },
            Primitive::Number => quote! { fn add_number(&mut self, field: &'static str, value: i64) },
        };

        quote! {
            #signature {
                match field {
                    #(#cases)*
                    _ => {}
                };
            }
        }
    });

    let lineno_method = lineno_method.map(|(ident, handler)| {
        let assignment = if let Some(Handler { ty, acc, val, body }) = handler {
            quote! {
                (|#acc: &mut #ty, #val| #body)(&mut self.#ident, lineno)
            }
        } else {
            quote! { self.#ident = Some(lineno) }
        };

        quote! {
            fn add_line_number(&mut self, lineno: usize) {
                #assignment;
            }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl FromRecord for #name {
            #(#field_methods)*
            #lineno_method
        }
    };

    Ok(expanded.into())
}

/// The kind of value a field receives, selecting the receiver method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Primitive {
    /// Text and dates, received as `&str`.
    Text,
    /// Numbers, received as `i64`.
    Number,
}

impl Primitive {
    /// Classify the type of a stored or received value.
    fn of(ty: &Type) -> Option<Self> {
        match ty {
            Type::Reference(reference) => match &*reference.elem {
                Type::Path(path) if path.path.is_ident("str") => Some(Self::Text),
                _ => None,
            },
            Type::Path(path) => {
                let segment = path.path.segments.last()?;

                if segment.ident == "String" {
                    Some(Self::Text)
                } else if segment.ident == "i64" {
                    Some(Self::Number)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    primitive: Primitive,
    identifier: FieldIdentifier,
    handler: Option<Handler>,
}

/// An accumulator closure, split into its parts.
#[derive(Debug)]
struct Handler {
    /// Type of the struct field, annotated on the accumulator.
    ty: Type,
    acc: Pat,
    val: Pat,
    body: Expr,
}

impl Handler {
    fn new(ty: Type, closure: ExprClosure) -> Result<Self> {
        let span = closure.span();
        let mut inputs = closure.inputs.into_iter();

        let (Some(acc), Some(val), None) = (inputs.next(), inputs.next(), inputs.next()) else {
            Err(Error::new(span, "Handler closure must have two parameters."))?
        };

        Ok(Self {
            ty,
            acc,
            val,
            body: *closure.body,
        })
    }
}

#[derive(Debug)]
enum FieldIdentifier {
    Name(LitStr),
    LineNumber,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("field")) else {
            return Ok(None);
        };

        let FieldAttribute {
            identifier,
            handler,
        } = attr.meta.require_list()?.parse_args()?;

        // The line number is received as `usize`, and needs no classification.
        let primitive = match (&identifier, &handler) {
            (FieldIdentifier::LineNumber, _) => Primitive::Number,
            (FieldIdentifier::Name(_), Some(handler)) => handler_primitive(handler)?,
            (FieldIdentifier::Name(_), None) => {
                let inner = option_inner(&field.ty)?;

                let Some(primitive) = Primitive::of(inner) else {
                    Err(Error::new_spanned(
                        inner,
                        "Field without a handler must have type `Option<String>` or `Option<i64>`.",
                    ))?
                };

                primitive
            }
        };

        if let (FieldIdentifier::LineNumber, None) = (&identifier, &handler) {
            option_inner(&field.ty)?;
        }

        let handler = handler
            .map(|h| Handler::new(field.ty.clone(), h))
            .transpose()?;

        Ok(Some(Self {
            name,
            primitive,
            identifier,
            handler,
        }))
    }
}

/// Classify a handler closure by the annotated type of its second parameter.
fn handler_primitive(handler: &ExprClosure) -> Result<Primitive> {
    let Some(parameter) = handler.inputs.iter().nth(1) else {
        Err(Error::new_spanned(
            handler,
            "Handler closure must have two parameters.",
        ))?
    };

    let Pat::Type(pat_type) = parameter else {
        Err(Error::new_spanned(
            parameter,
            "Handler closure's second parameter must be annotated as `&str` or `i64`.",
        ))?
    };

    let Some(primitive) = Primitive::of(&pat_type.ty) else {
        Err(Error::new_spanned(
            &pat_type.ty,
            "Handler closure's second parameter must be annotated as `&str` or `i64`.",
        ))?
    };

    Ok(primitive)
}

/// Retrieve `T` from a field of type `Option<T>`.
fn option_inner(ty: &Type) -> Result<&Type> {
    let Type::Path(path) = ty else {
        Err(Error::new_spanned(ty, "Field must have a type annotation."))?
    };

    let Some(segment) = path.path.segments.last() else {
        Err(Error::new_spanned(
            &path.path.segments,
            "Field must have a type annotation.",
        ))?
    };

    if segment.ident != "Option" {
        Err(Error::new_spanned(
            &segment.ident,
            "Field without a handler must have type `Option<T>`.",
        ))?
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        Err(Error::new_spanned(
            &segment.arguments,
            "Field of type `Option<T>` must have a generic parameter.",
        ))?
    };

    let Some(GenericArgument::Type(inner)) = arguments.args.first() else {
        Err(Error::new_spanned(
            &arguments.args,
            "Generic argument of a field of type `Option<T>` must be a type.",
        ))?
    };

    Ok(inner)
}

#[derive(Debug)]
struct FieldAttribute {
    identifier: FieldIdentifier,
    handler: Option<ExprClosure>,
}

impl Parse for FieldAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let identifier = if input.peek(LitStr) {
            FieldIdentifier::Name(input.parse::<LitStr>()?)
        } else {
            let ident = input.parse::<Ident>()?;

            if ident != "lineno" {
                Err(Error::new_spanned(
                    ident,
                    "Field identifier must be a string literal or `lineno`.",
                ))?
            }

            FieldIdentifier::LineNumber
        };

        let handler = if !input.is_empty() {
            input.parse::<Token![,]>()?;
            Some(input.parse::<ExprClosure>()?)
        } else {
            None
        };

        Ok(Self {
            identifier,
            handler,
        })
    }
}
