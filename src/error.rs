//! Errors raised while decoding a report.

use alloc::string::String;

use thiserror::Error;

/// An error decoding a report.
///
/// All variants are fatal to the decode call in which they occur. Messages
/// append their context as `key=value` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line ends in a code with no registered layout.
    #[error("Unknown line record: type={code}, lineno={lineno}")]
    UnknownRecordType { code: String, lineno: usize },
    /// The layout of a line does not cover it exactly.
    #[error("Line record length mismatch: offset={offset}, length={length}, lineno={lineno}")]
    LineLengthMismatch {
        offset: usize,
        length: usize,
        lineno: usize,
    },
    /// The closing summary declares a line count other than its own line
    /// number. The declared count is kept as written where it is not a whole
    /// number.
    #[error("Line record count mismatch: expected={expected}, actual={actual}")]
    RecordCountMismatch { expected: String, actual: usize },
}

/// Check whether an error was raised by decoding a report.
///
/// Errors from elsewhere, including I/O errors from a reader, are not
/// decoding errors.
pub fn is_decode_error(err: &(dyn core::error::Error + 'static)) -> bool {
    if err.is::<Error>() {
        return true;
    }

    #[cfg(feature = "std")]
    if let Some(crate::avec::reader::Error::Decode(_)) =
        err.downcast_ref::<crate::avec::reader::Error>()
    {
        return true;
    }

    false
}
