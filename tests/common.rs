#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use ledger_report::avec::{FromRecord, FromRecords, RecordType};

const PATH: &str = "fixtures/statement.mn";

#[test]
fn decode_slice_statement() {
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    ledger_report::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_reader_statement() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    ledger_report::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish();
}

#[test]
fn decode_document_statement() {
    let data = std::fs::read(PATH).unwrap();
    let document = ledger_report::decode(&data).unwrap();

    let expected = Validator::new(PATH).1;
    assert_eq!(document.len(), expected.len());

    for (record, row) in document.iter().zip(&expected) {
        assert_eq!(record.record_type().code().to_string(), row[0]);

        let fields: Vec<String> = record
            .fields()
            .flat_map(|(name, value)| [name.to_string(), value.to_string()])
            .collect();
        assert_eq!(fields, row[1..]);
    }
}

#[test]
fn decode_document_is_deterministic() {
    let data = std::fs::read(PATH).unwrap();
    assert_eq!(
        ledger_report::decode(&data).unwrap(),
        ledger_report::decode(&data).unwrap()
    );
}

/// Receiver checking each published value against the next cell of a CSV
/// file, holding the current row, the remaining rows, and the line number.
struct Validator(Vec<String>, Vec<Vec<String>>, usize);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self(vec![], expected, 0)
    }

    fn validate_field(&mut self, field: &str, value: &str) {
        assert_eq!(self.0.remove(0), field, "line {}", self.2);
        assert_eq!(self.0.remove(0), value, "line {} field {field}", self.2);
    }

    fn finish(&self) {
        assert!(self.0.is_empty(), "unreceived fields: {:?}", self.0);
        assert!(self.1.is_empty(), "unreceived lines: {}", self.1.len());
    }
}

impl FromRecords for Validator {
    fn add_record(&mut self, record: RecordType) -> Option<&mut dyn FromRecord> {
        assert!(self.0.is_empty(), "unreceived fields: {:?}", self.0);
        self.0 = self.1.remove(0);
        assert_eq!(self.0.remove(0), record.code().to_string());
        Some(self)
    }
}

impl FromRecord for Validator {
    fn add_line_number(&mut self, lineno: usize) {
        self.2 += 1;
        assert_eq!(lineno, self.2);
    }
    fn add_text(&mut self, field: &'static str, value: &str) {
        self.validate_field(field, value);
    }
    fn add_number(&mut self, field: &'static str, value: i64) {
        self.validate_field(field, &value.to_string());
    }
    fn add_date(&mut self, field: &'static str, value: &str) {
        self.validate_field(field, value);
    }
}
