#![cfg(feature = "std")]

use ledger_report::{
    Error, RecordType, Value,
    avec::slice::{decode_line, split_lines},
    is_decode_error,
    sans::{
        format::{LINE_LENGTH, lookup},
        value::parse_number,
    },
};

/// Lay out fields left-aligned at their widths.
fn pad(fields: &[(&str, usize)]) -> String {
    fields.iter().map(|&(v, w)| format!("{v:<w$}")).collect()
}

fn summary(count: &str) -> String {
    pad(&[("20200826", 8), ("1", 5), (count, 6), ("", 978), ("909", 3)])
}

fn reserved(code: &str) -> String {
    pad(&[("", 997), (code, 3)])
}

fn report(lines: &[String]) -> Vec<u8> {
    lines.iter().flat_map(|l| format!("{l}\r\n").into_bytes()).collect()
}

#[test]
fn decode_single_summary() {
    let document = ledger_report::decode(&report(&[summary("1")])).unwrap();

    assert_eq!(document.len(), 1);
    let record = &document[0];
    assert_eq!(record.record_type(), RecordType::BatchSummary);
    assert_eq!(record.len(), 5);
    assert_eq!(record.get("tip_sloga"), Some(&Value::Number(909)));
    assert_eq!(record.get("broj_slogova"), Some(&Value::Number(1)));
    assert_eq!(record.get("broj_grupa"), Some(&Value::Number(1)));
    assert_eq!(record.get("datum_obrade").and_then(Value::as_str), Some("2020-08-26"));
    assert_eq!(record.get("rezerva"), Some(&Value::Text(String::new())));
}

#[test]
fn decode_summary_count_mismatch() {
    let err = ledger_report::decode(&report(&[summary("2")])).unwrap_err();
    assert_eq!(
        err,
        Error::RecordCountMismatch {
            expected: "2".into(),
            actual: 1
        }
    );
    assert_eq!(err.to_string(), "Line record count mismatch: expected=2, actual=1");
}

#[test]
fn decode_summary_after_padding() {
    let lines = [reserved("999"), reserved("999"), summary("3")];
    let document = ledger_report::decode(&report(&lines)).unwrap();

    assert_eq!(document.len(), 3);
    let codes: Vec<_> = document.iter().map(|r| r.record_type().code()).collect();
    assert_eq!(codes, [999, 999, 909]);

    let lines = [reserved("999"), summary("3")];
    let err = ledger_report::decode(&report(&lines)).unwrap_err();
    assert_eq!(
        err,
        Error::RecordCountMismatch {
            expected: "3".into(),
            actual: 2
        }
    );
}

#[test]
fn decode_blank_summary_count() {
    let err = ledger_report::decode(&report(&[summary("")])).unwrap_err();
    assert_eq!(
        err,
        Error::RecordCountMismatch {
            expected: "0".into(),
            actual: 1
        }
    );
}

#[test]
fn decode_unknown_record_type() {
    let lines = [reserved("999"), reserved("123"), summary("3")];
    let err = ledger_report::decode(&report(&lines)).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownRecordType {
            code: "123".into(),
            lineno: 2
        }
    );
    assert_eq!(err.to_string(), "Unknown line record: type=123, lineno=2");
}

#[test]
fn decode_short_line() {
    let line = pad(&[("", 990), ("999", 3)]);
    let err = ledger_report::decode(&report(&[line])).unwrap_err();
    assert_eq!(
        err,
        Error::LineLengthMismatch {
            offset: 1000,
            length: 993,
            lineno: 1
        }
    );
}

#[test]
fn decode_long_line() {
    let line = pad(&[("", 1002), ("999", 3)]);
    let err = ledger_report::decode(&report(&[reserved("999"), line])).unwrap_err();
    assert_eq!(
        err,
        Error::LineLengthMismatch {
            offset: 1000,
            length: 1005,
            lineno: 2
        }
    );
}

#[test]
fn decode_truncated_line_with_shifted_numbers() {
    let line = pad(&[("20200826", 8), ("ABC", 5), ("1", 6), ("", 970), ("909", 3)]);
    let err = ledger_report::decode(&report(&[line])).unwrap_err();
    assert!(matches!(err, Error::LineLengthMismatch { length: 992, .. }));
}

fn transaction(rate: &str) -> String {
    let fields = pad(&[("", 176), ("20200826", 8), ("20200826", 8), ("EUR", 3), (rate, 15)]);
    pad(&[(&fields, 997), ("905", 3)])
}

#[test]
fn decode_malformed_number() {
    let document = ledger_report::decode(&report(&[transaction("12,50")])).unwrap();

    let rate = document[0].get("tecaj").unwrap();
    assert_eq!(rate, &Value::Malformed("12,50".into()));
    assert_eq!(rate.as_number(), None);
    assert_eq!(rate.to_string(), "12,50");
    assert_eq!(document[0].get("valuta_pokrica").and_then(Value::as_str), Some("EUR"));
    assert_eq!(document[0].len(), 21);
}

#[test]
fn decode_decimal_number() {
    let document = ledger_report::decode(&report(&[transaction("7.0")])).unwrap();
    assert_eq!(document[0].get("tecaj"), Some(&Value::Number(7)));

    let document = ledger_report::decode(&report(&[summary("1.0")])).unwrap();
    assert_eq!(document[0].get("broj_slogova"), Some(&Value::Number(1)));
}

#[test]
fn decode_malformed_summary_count() {
    let err = ledger_report::decode(&report(&[summary("abc")])).unwrap_err();
    assert_eq!(
        err,
        Error::RecordCountMismatch {
            expected: "abc".into(),
            actual: 1
        }
    );
    assert_eq!(err.to_string(), "Line record count mismatch: expected=abc, actual=1");

    let err = ledger_report::decode(&report(&[summary("1,0")])).unwrap_err();
    assert!(matches!(err, Error::RecordCountMismatch { actual: 1, .. }));
}

#[test]
fn parse_whole_numbers() {
    assert_eq!(parse_number("-7"), Some(-7));
    assert_eq!(parse_number("+15"), Some(15));
    assert_eq!(parse_number("1.0"), Some(1));
    assert_eq!(parse_number("1e3"), Some(1000));
    assert_eq!(parse_number("2.5"), None);
    assert_eq!(parse_number("12,50"), None);
    assert_eq!(parse_number("NaN"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_number("9223372036854775807"), Some(i64::MAX));
    assert_eq!(parse_number("9223372036854775808"), None);
}

#[test]
fn decode_blank_date_and_number() {
    let line = pad(&[("", 8), ("", 5), ("1", 6), ("", 978), ("909", 3)]);
    let document = ledger_report::decode(&report(&[line])).unwrap();
    assert_eq!(document[0].get("datum_obrade"), Some(&Value::Date(String::new())));
    assert_eq!(document[0].get("broj_grupa"), Some(&Value::Number(0)));
}

#[test]
fn decode_windows_1250_text() {
    let mut line = pad(&[("", 997), ("999", 3)]).into_bytes();
    line[..6].copy_from_slice(&[0x8A, 0xE8, 0x9E, 0xC6, 0xF0, 0x84]);
    line.extend_from_slice(b"\n");

    let document = ledger_report::decode(&line).unwrap();
    assert_eq!(
        document[0].get("rezerva").and_then(Value::as_str),
        Some("Ščž\u{106}đ\u{201E}")
    );
}

#[test]
fn decode_empty_report() {
    assert!(ledger_report::decode(b"").unwrap().is_empty());
}

#[test]
fn decode_without_final_terminator() {
    let mut data = report(&[reserved("999"), summary("2")]);
    data.truncate(data.len() - 2);
    assert_eq!(ledger_report::decode(&data).unwrap().len(), 2);
}

#[test]
fn decode_trailing_blank_line() {
    let mut data = report(&[summary("1")]);
    data.extend_from_slice(b"\r\n");
    let err = ledger_report::decode(&data).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownRecordType {
            code: String::new(),
            lineno: 2
        }
    );
}

#[test]
fn decode_mixed_terminators() {
    let data = format!("{}\n{}\r\n", reserved("999"), summary("2"));
    assert_eq!(ledger_report::decode(data.as_bytes()).unwrap().len(), 2);
}

#[test]
fn split_lines_terminators() {
    assert_eq!(split_lines("a\r\nb\nc").collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(split_lines("a\n").collect::<Vec<_>>(), ["a"]);
    assert_eq!(split_lines("a\n\n").collect::<Vec<_>>(), ["a", ""]);
    assert_eq!(split_lines("").count(), 0);
}

#[test]
fn decode_line_with_schema() {
    let line = summary("7");
    let record = decode_line(RecordType::BatchSummary, &line, 1).unwrap();
    assert_eq!(record.get("broj_slogova"), Some(&Value::Number(7)));

    let err = decode_line(RecordType::Reserved, &line[..999], 4).unwrap_err();
    assert_eq!(
        err,
        Error::LineLengthMismatch {
            offset: 1000,
            length: 999,
            lineno: 4
        }
    );
}

#[test]
fn decode_date_reformat() {
    let line = pad(&[("", 36), ("", 70), ("", 70), ("20200826", 8), ("20191231", 8)]);
    let line = pad(&[(&line, 1000 - 3), ("905", 3)]);
    let record = decode_line(RecordType::Transaction, &line, 1).unwrap();
    assert_eq!(record.get("datum_valute").and_then(Value::as_str), Some("2020-08-26"));
    assert_eq!(record.get("datum_izvrsenja").and_then(Value::as_str), Some("2019-12-31"));
    assert_eq!(record.get("iznos"), Some(&Value::Number(0)));
    assert_eq!(record.len(), 21);
}

#[test]
fn registry_layouts() {
    let counts = [(900, 7), (903, 15), (905, 21), (907, 27), (909, 5), (999, 2)];

    for (record, (code, count)) in RecordType::ALL.into_iter().zip(counts) {
        assert_eq!(record.code(), code);

        let schema = lookup(&code.to_string()).unwrap();
        assert_eq!(schema, record.schema());
        assert_eq!(schema.len(), count);
        assert_eq!(schema.iter().map(|f| f.length).sum::<usize>(), LINE_LENGTH);
        assert_eq!(schema.last().unwrap().name, "tip_sloga");
    }

    assert!(lookup("901").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn classify_errors() {
    let err = ledger_report::decode(&report(&[summary("2")])).unwrap_err();
    assert!(is_decode_error(&err));

    let io = std::io::Error::other("disconnected");
    assert!(!is_decode_error(&io));

    let mut reader = std::io::Cursor::new(report(&[reserved("000")]));
    let mut document = ledger_report::Document::new();
    let err = ledger_report::avec::decode_reader(&mut reader, &mut document).unwrap_err();
    assert!(is_decode_error(&err));

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(is_decode_error(boxed.as_ref()));
}
