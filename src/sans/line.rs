//! States processing lines and their fields.

use alloc::string::String;

use either::Either::{self, Left, Right};

use crate::error::Error;

use super::{
    check::Declared,
    format::{FieldSpec, RecordType},
    value::{Decoded, trim},
};

/// State token to decode the record-type code of a line.
#[derive(Debug)]
pub struct Lines {
    pub(super) lineno: usize,
}

impl Default for Lines {
    fn default() -> Self {
        Self::new()
    }
}

impl Lines {
    /// Begin decoding at the first line of a report.
    pub fn new() -> Self {
        Self { lineno: 1 }
    }

    /// Begin decoding at a given (1-based) line of a report.
    pub fn at(lineno: usize) -> Self {
        Self { lineno }
    }

    /// The 1-based number of the line this token expects.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Transition to another state by decoding the record-type code of a
    /// line, its last three characters.
    ///
    /// Returns a successor state token for the first field of the line.
    pub fn advance(self, code: &str) -> Result<Field, Error> {
        let Some(record) = RecordType::from_code(code) else {
            return Err(Error::UnknownRecordType {
                code: String::from(code),
                lineno: self.lineno,
            });
        };

        Ok(self.enter(record))
    }

    /// Transition to another state with a known record type.
    ///
    /// Returns a successor state token for the first field of the line.
    pub fn enter(self, record: RecordType) -> Field {
        Field {
            record,
            index: 0,
            offset: 0,
            declared: None,
            lineno: self.lineno,
        }
    }
}

/// State token to decode a field of a line.
#[derive(Debug)]
pub struct Field {
    record: RecordType,
    index: usize,
    offset: usize,
    declared: Option<Declared>,
    lineno: usize,
}

impl Field {
    /// The record type of the line.
    pub fn record(&self) -> RecordType {
        self.record
    }

    /// The layout of the field this token expects.
    pub fn spec(&self) -> &'static FieldSpec {
        &self.record.schema()[self.index]
    }

    /// The offset, in characters, of the field this token expects.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The 1-based number of the line.
    pub fn lineno(&self) -> usize {
        self.lineno
    }

    /// Transition to another state by decoding the raw text of a field.
    ///
    /// The text should be `spec().length` characters long, or shorter where
    /// the line ends early.
    ///
    /// Returns the field layout, the decoded value, and a successor state.
    pub fn advance(self, r: &str) -> (&'static FieldSpec, Decoded<'_>, Either<Field, LineEnd>) {
        let spec = self.spec();
        let value = spec.decode.apply(r);

        let declared = match self.record.count_field() {
            Some(name) if name == spec.name => Some(match value {
                Decoded::Number(n) => Declared::Count(n),
                _ => Declared::Malformed(String::from(trim(r))),
            }),
            _ => self.declared,
        };

        let offset = self.offset + spec.length;
        let index = self.index + 1;

        let successor = if index < self.record.schema().len() {
            Left(Field {
                record: self.record,
                index,
                offset,
                declared,
                lineno: self.lineno,
            })
        } else {
            Right(LineEnd {
                offset,
                declared,
                lineno: self.lineno,
            })
        };

        (spec, value, successor)
    }
}

/// State token to check a line was consumed in full.
#[derive(Debug)]
pub struct LineEnd {
    offset: usize,
    declared: Option<Declared>,
    lineno: usize,
}

impl LineEnd {
    /// Transition to another state by checking the length, in characters, of
    /// the whole line against its layout.
    ///
    /// Returns the line count declared by a closing summary, if this line was
    /// one, and a successor state token for the next line.
    pub fn advance(self, length: usize) -> Result<(Option<Declared>, Lines), Error> {
        if self.offset != length {
            Err(Error::LineLengthMismatch {
                offset: self.offset,
                length,
                lineno: self.lineno,
            })?;
        }

        let successor = Lines {
            lineno: self.lineno + 1,
        };

        Ok((self.declared, successor))
    }
}
