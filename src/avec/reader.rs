//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use super::FromRecords;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error decoding the report.
    #[error(transparent)]
    Decode(#[from] crate::error::Error),
}

/// Decode every line of a report from a reader, publishing to a receiver.
///
/// The reader is read to its end before decoding begins.
///
/// This method is also re-exported as `ledger_report::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromRecords) -> Result<(), Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    super::slice::decode(&buf, o)?;

    Ok(())
}
