//! Derive macros for receiving decoded report lines into typed structs.
//!
//! These macros are re-exported by `ledger_report::avec`, where they are
//! documented alongside the traits they implement.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod from_record;
mod from_records;

/// Implement `FromRecord` from `#[field("name")]` and `#[field(lineno)]`
/// attributes.
#[proc_macro_derive(FromRecord, attributes(field))]
pub fn derive_from_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_record::expand_from_record(&input).unwrap_or_else(|err| err.to_compile_error().into())
}

/// Implement `FromRecords` from `#[record(code)]` attributes.
#[proc_macro_derive(FromRecords, attributes(record))]
pub fn derive_from_records(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_records::expand_from_records(&input).unwrap_or_else(|err| err.to_compile_error().into())
}
