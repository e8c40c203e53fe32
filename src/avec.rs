//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module are suited to decoding whole reports from
//! files and byte slices, publishing to the [`FromRecords`] and [`FromRecord`]
//! traits.
//!
//! A [`Document`] receives every line as a generic [`LineRecord`]. When only
//! some record types or fields are of interest, these traits can be derived
//! instead. See the [`FromRecords`](macro@FromRecords) and
//! [`FromRecord`](macro@FromRecord) macros for details.

#[cfg(feature = "std")]
pub mod reader;
pub mod record;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use record::{Document, LineRecord, Value};
pub use slice::decode as decode_slice;

pub use crate::sans::format::RecordType;

/// Derive [`FromRecords`] for a struct holding a collection of records.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// To collect a single record, add the `record(N)` attribute to an `Option<T>`
/// struct field, where `N` is the record-type code and `T` is a type
/// implementing [`FromRecord`] and [`Default`]. Additional records received for
/// the same code will overwrite earlier ones. To collect multiple occurrences
/// of a record, apply the attribute to a `Vec<T>` instead.
///
/// The derived implementation names [`FromRecord`] and [`RecordType`], which
/// must be in scope.
///
/// ```
/// use ledger_report::avec::{FromRecord, FromRecords, RecordType};
///
/// #[derive(Debug, Default, FromRecords)]
/// struct Statements {
///     #[record(903)]
///     headers: Vec<StatementHeader>,
///     #[record(909)]
///     summary: Option<BatchSummary>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use ledger_report_derive::FromRecords;

/// Produce record receivers for a report.
///
/// See the [`FromRecords`](macro@FromRecords) derive macro for an automatic
/// implementation of this trait.
pub trait FromRecords {
    /// Retrieve a receiver for a line, if one exists.
    ///
    /// Lines without a receiver are still decoded and checked.
    fn add_record(&mut self, record: RecordType) -> Option<&mut dyn FromRecord>;
}

/// Derive [`FromRecord`] for a struct representing a single record.
///
/// _Requires Cargo feature `derive`._
///
/// # Examples
///
/// To receive a value for a record field, add the `field("name")` attribute to
/// an `Option<T>` struct field, where `name` is the field's name in the record
/// layout and `T` is `String` (for text and dates) or `i64` (for numbers).
///
/// Numeric fields holding something other than a whole number are not
/// received by these fields, and leave them as `None`.
///
/// To receive the line number of the record, supply `lineno` in place of a
/// field name on an `Option<usize>` field.
///
/// ```
/// #[derive(Debug, Default, FromRecord)]
/// struct BatchSummary {
///     #[field(lineno)]
///     line: Option<usize>,
///     #[field("datum_obrade")]
///     processing_date: Option<String>,
///     #[field("broj_slogova")]
///     record_count: Option<i64>,
/// }
/// ```
///
/// To receive values into arbitrary types, supply an accumulator closure.
/// Since the value type cannot be inferred, the second argument must be typed
/// as `&str` or `i64`.
///
/// ```
/// #[derive(Debug, Default, FromRecord)]
/// struct Transaction {
///     #[field("predznak2", |v, s: &str| *v = s == "-")]
///     is_debit: bool,
///     #[field("iznos")]
///     amount: Option<i64>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use ledger_report_derive::FromRecord;

/// Receive field values for a record.
///
/// Values are published in layout order, after the line number. Text is
/// trimmed, and dates are rewritten as `YYYY-MM-DD`.
///
/// The default implementation of each method ignores received values.
///
/// See the [`FromRecord`](macro@FromRecord) derive macro for an automatic
/// implementation of this trait.
#[allow(unused_variables)]
pub trait FromRecord {
    /// Add the 1-based line number to the record.
    fn add_line_number(&mut self, _: usize) {}
    /// Add text for a field to the record.
    fn add_text(&mut self, field: &'static str, _: &str) {}
    /// Add a number for a field to the record.
    ///
    /// Blank numeric fields are published as `0`.
    fn add_number(&mut self, field: &'static str, _: i64) {}
    /// Add the text of a numeric field holding something other than a whole
    /// number, such as `12,50`.
    fn add_malformed(&mut self, field: &'static str, _: &str) {}
    /// Add a date for a field to the record.
    ///
    /// Blank date fields are published as the empty string. By default, dates
    /// are forwarded to [`FromRecord::add_text`].
    fn add_date(&mut self, field: &'static str, value: &str) {
        self.add_text(field, value)
    }
}
