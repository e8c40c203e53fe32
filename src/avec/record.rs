//! Generic records holding every field of a line.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::sans::format::RecordType;

use super::{FromRecord, FromRecords};

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(i64),
    /// The text of a numeric field holding something other than a whole
    /// number.
    Malformed(String),
    /// A `YYYY-MM-DD` date, or the empty string for a blank field.
    Date(String),
}

impl Value {
    /// The value as text, if it is text or a date.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Date(s) => Some(s),
            Value::Number(_) | Value::Malformed(_) => None,
        }
    }

    /// The value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Malformed(s) | Value::Date(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Every field of a single line, in layout order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    record: RecordType,
    fields: Vec<(&'static str, Value)>,
}

impl LineRecord {
    pub fn new(record: RecordType) -> Self {
        Self {
            record,
            fields: Vec::with_capacity(record.schema().len()),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record
    }

    /// Retrieve the value of a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Iterate over fields and their values, in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromRecord for LineRecord {
    fn add_text(&mut self, field: &'static str, value: &str) {
        self.fields.push((field, Value::Text(String::from(value))));
    }

    fn add_number(&mut self, field: &'static str, value: i64) {
        self.fields.push((field, Value::Number(value)));
    }

    fn add_malformed(&mut self, field: &'static str, value: &str) {
        self.fields.push((field, Value::Malformed(String::from(value))));
    }

    fn add_date(&mut self, field: &'static str, value: &str) {
        self.fields.push((field, Value::Date(String::from(value))));
    }
}

/// Every line of a report, in order.
pub type Document = Vec<LineRecord>;

impl FromRecords for Vec<LineRecord> {
    fn add_record(&mut self, record: RecordType) -> Option<&mut dyn FromRecord> {
        self.push(LineRecord::new(record));
        self.last_mut().map(|r| r as _)
    }
}
