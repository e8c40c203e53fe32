//! Slice-based decoder implementation.

use either::Either::{Left, Right};
use tracing::{debug, trace};

use crate::{
    codepage,
    error::Error,
    sans::{
        Decoder,
        check::check_record_count,
        format::RecordType,
        line::{Field, LineEnd, Lines},
        value::{Decoded, split_chars},
    },
};

use super::{FromRecord, FromRecords, LineRecord};

/// Decode every line of a report from a slice, publishing to a receiver.
///
/// Decoding stops at the first error. The receiver may already hold records
/// for earlier lines when it does.
///
/// This method is also re-exported as `ledger_report::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromRecords) -> Result<(), Error> {
    let text = codepage::decode(r);

    let mut lines = Decoder::new();

    for line in split_lines(&text) {
        lines = match decode_next(lines, line, o) {
            Ok(lines) => lines,
            Err(err) => {
                debug!(error = %err, "failed to decode report");
                Err(err)?
            }
        };
    }

    debug!(lines = lines.lineno() - 1, "decoded report");

    Ok(())
}

/// Decode a single line against a known record type.
///
/// The line number is used only to report errors. A closing summary's
/// declared line count is not checked.
pub fn decode_line(record: RecordType, line: &str, lineno: usize) -> Result<LineRecord, Error> {
    let mut o = LineRecord::new(record);

    let state = Lines::at(lineno).enter(record);
    let end = decode_fields(state, line, Some(&mut o as &mut dyn FromRecord));
    end.advance(line.chars().count())?;

    Ok(o)
}

/// Split decoded text into lines, accepting `\n` or `\r\n` terminators.
///
/// A final terminator does not begin another line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// The record-type code of a line, its last three characters.
pub fn record_code(line: &str) -> &str {
    let start = line.char_indices().rev().nth(2).map_or(0, |(i, _)| i);
    &line[start..]
}

fn decode_next(state: Lines, line: &str, o: &mut impl FromRecords) -> Result<Lines, Error> {
    let state = state.advance(record_code(line))?;

    let lineno = state.lineno();
    trace!(lineno, record = state.record().code(), "decoding line");

    // Shadow the report receiver with that of a single line.
    let mut o = o.add_record(state.record());

    if let Some(o) = &mut o {
        o.add_line_number(lineno);
    }

    let end = decode_fields(state, line, o);
    let (declared, successor) = end.advance(line.chars().count())?;

    if let Some(declared) = declared {
        check_record_count(declared, lineno)?;
    }

    Ok(successor)
}

fn decode_fields(
    mut state: Field,
    line: &str,
    mut o: Option<&mut dyn FromRecord>,
) -> LineEnd {
    let mut r = line;

    loop {
        let (f, rest) = split_chars(r, state.spec().length);
        r = rest;

        let (spec, value, successor) = state.advance(f);

        if let Some(o) = o.as_deref_mut() {
            publish(o, spec.name, value);
        }

        state = match successor {
            Left(state) => state,
            Right(end) => return end,
        };
    }
}

fn publish(o: &mut dyn FromRecord, field: &'static str, value: Decoded<'_>) {
    match value {
        Decoded::Text(v) => o.add_text(field, v),
        Decoded::Number(v) => o.add_number(field, v),
        Decoded::Malformed(v) => o.add_malformed(field, v),
        Decoded::Date(v) => o.add_date(field, &v),
    }
}
