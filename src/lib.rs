#![no_std]

//! A strict decoder for fixed-width HUB3 bank statement reports.
//!
//! A report is a windows-1250 text file of 1000-character lines. The last
//! three characters of every line name its record type, which selects a fixed
//! field layout. The closing batch summary (`909`) declares the number of
//! lines in the report, which must match its own line number.
//!
//! Most users should call [`decode`] for a generic [`Document`], or decode
//! into typed records with the functions and derive macros in the [`avec`]
//! module. The underlying finite-state machine is exposed in the [`sans`]
//! module.
//!
//! Decoded values are not checked for business meaning: currency codes, IBANs
//! and dates are passed through as found. Blank numeric fields decode to `0`,
//! following the behaviour of existing consumers of this format.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros and the [`records`] module (default).
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod codepage;
pub mod error;
#[cfg(feature = "derive")]
pub mod records;
pub mod sans;

pub use avec::{Document, LineRecord, Value};
pub use error::{Error, is_decode_error};
pub use sans::format::RecordType;

/// Decode a whole report into a [`Document`], one [`LineRecord`] per line.
///
/// Either every line decodes, or the first error is returned.
pub fn decode(r: &[u8]) -> Result<Document, Error> {
    let mut document = Document::new();
    avec::decode_slice(r, &mut document)?;
    Ok(document)
}
