//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as decoding lines as they arrive from another
//! source. See [`crate::avec`] for implementations covering common decoding
//! patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Transition to another
//! state by calling the token's `advance` method with the text it expects.
//! This will return a successor state token, along with any decoded data.
//!
//! A report is decoded line by line. [`line::Lines`] expects the record-type
//! code of the next line, and selects its layout from the [`format`]
//! registry. [`line::Field`] then expects the raw text of each field in
//! layout order, and [`line::LineEnd`] expects the length of the whole line,
//! confirming the layout covered it exactly before returning to
//! [`line::Lines`].
//!
//! Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Converting the report from its code page and splitting it into lines. A
//! helper is provided in the [`crate::codepage`] module.
//!
//! - Slicing each field from the line by its length in characters, passing a
//! shorter slice where the line ends early.
//!
//! - Applying the closing record count check. A helper function is provided in
//! the [`check`] module.
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

pub mod check;
pub mod format;
pub mod line;
pub mod value;

/// Entrypoint to the finite-state machine.
pub type Decoder = line::Lines;
