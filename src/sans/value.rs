//! Decoding the text of a single field.

use alloc::{borrow::Cow, format};

use super::format::Decode;

/// A decoded field value, borrowing from the line where possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    Text(&'a str),
    Number(i64),
    /// The text of a numeric field holding something other than a number.
    Malformed(&'a str),
    /// A `YYYY-MM-DD` date, or the empty string for a blank field.
    Date(Cow<'a, str>),
}

impl Decode {
    /// Decode the raw text of a field.
    ///
    /// Decoding never fails. A numeric field holding something other than a
    /// whole number decodes to [`Decoded::Malformed`].
    pub fn apply(self, r: &str) -> Decoded<'_> {
        let r = trim(r);

        match self {
            Decode::Text => Decoded::Text(r),
            Decode::Numeric if r.is_empty() => Decoded::Number(0),
            Decode::Numeric => parse_number(r).map_or(Decoded::Malformed(r), Decoded::Number),
            Decode::Date if r.is_empty() => Decoded::Date(Cow::Borrowed(r)),
            Decode::Date => {
                let (year, rest) = split_chars(r, 4);
                let (month, rest) = split_chars(rest, 2);
                let (day, _) = split_chars(rest, 2);
                Decoded::Date(Cow::Owned(format!("{year}-{month}-{day}")))
            }
        }
    }
}

/// Parse a whole number, written as an integer or in decimal notation such as
/// `1.0` or `1e3`.
pub fn parse_number(r: &str) -> Option<i64> {
    if let Ok(n) = r.parse() {
        return Some(n);
    }

    // 2^63, the first whole number past the range of `i64`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let f: f64 = r.parse().ok()?;
    let n = f as i64;

    ((-LIMIT..LIMIT).contains(&f) && n as f64 == f).then_some(n)
}

/// Strip surrounding whitespace, including byte order marks.
pub fn trim(r: &str) -> &str {
    r.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Split a string after a number of characters, or at its end if shorter.
pub fn split_chars(r: &str, n: usize) -> (&str, &str) {
    let end = r.char_indices().nth(n).map_or(r.len(), |(i, _)| i);
    r.split_at(end)
}
