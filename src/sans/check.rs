//! Helper for checking the line count declared by a closing summary.

use alloc::string::{String, ToString};

use crate::error::Error;

/// The line count declared by a closing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    Count(i64),
    /// Text other than a whole number, matching no line number.
    Malformed(String),
}

/// Check the line count declared by a closing summary against its own line
/// number.
pub fn check_record_count(declared: Declared, lineno: usize) -> Result<(), Error> {
    let expected = match declared {
        Declared::Count(n) if usize::try_from(n).ok() == Some(lineno) => return Ok(()),
        Declared::Count(n) => n.to_string(),
        Declared::Malformed(text) => text,
    };

    Err(Error::RecordCountMismatch {
        expected,
        actual: lineno,
    })
}
