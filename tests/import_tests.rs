//! Import surface tests against the bundled calamine backend

use chrono::NaiveDateTime;
use sheetmap::sheet;
use sheetmap::workbook::XlsxWorkbook;
use sheetmap::{RecordFields, SheetError, SheetRecord, WorkbookWrite};
use tempfile::TempDir;

#[derive(Debug, Default, Clone, PartialEq)]
struct Reading {
    sensor: String,
    value: i32,
    taken_at: Option<NaiveDateTime>,
}

impl SheetRecord for Reading {
    fn fields() -> RecordFields<Self> {
        RecordFields::new()
            .text(
                "sensor",
                "Sensor",
                |r: &Reading| Some(r.sensor.clone()),
                |r, v| r.sensor = v,
            )
            .int(
                "value",
                "Value",
                |r: &Reading| Some(r.value),
                |r, v| r.value = v,
            )
            .date_time(
                "taken_at",
                "Taken At",
                |r: &Reading| r.taken_at,
                |r, v| r.taken_at = Some(v),
            )
    }
}

/// Build an xlsx buffer out of literal rows.
fn xlsx_of(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = XlsxWorkbook::new();
    let sheet = workbook.create_sheet("data").unwrap();
    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            workbook.write_cell(sheet, r as u32, c as u16, value).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// File-name sniffing
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_rejects_empty_file_name() {
    let err = sheet::import_bytes("", b"irrelevant", Reading::default).unwrap_err();
    assert!(matches!(err, SheetError::EmptyFileName));
}

#[test]
fn test_import_rejects_unclear_file_type() {
    let err = sheet::import_bytes("readings", b"irrelevant", Reading::default)
        .unwrap_err();
    assert!(matches!(err, SheetError::InvalidFileType(_)));
}

#[test]
fn test_import_rejects_foreign_extension() {
    let err = sheet::import_bytes("readings.pdf", b"irrelevant", Reading::default)
        .unwrap_err();
    assert!(matches!(err, SheetError::UnsupportedExtension(_)));
}

#[test]
fn test_import_rejects_bytes_that_are_not_a_workbook() {
    let err =
        sheet::import_bytes("readings.xlsx", b"garbage", Reading::default).unwrap_err();
    assert!(matches!(err, SheetError::Backend(_)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Row mapping
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_skips_the_header_row() {
    let bytes = xlsx_of(&[
        &["Sensor", "Value", "Taken At"],
        &["t1", "20", "2021-06-01 12:00:00"],
    ]);
    let readings: Vec<Reading> =
        sheet::import_bytes("readings.xlsx", &bytes, Reading::default).unwrap();

    assert_eq!(readings.len(), 1);
    // No record ever materializes from the header text.
    assert_eq!(readings[0].sensor, "t1");
}

#[test]
fn test_import_truncates_fractional_integers() {
    let bytes = xlsx_of(&[&["Sensor", "Value"], &["t1", "42.9"]]);
    let readings: Vec<Reading> =
        sheet::import_bytes("readings.xlsx", &bytes, Reading::default).unwrap();
    assert_eq!(readings[0].value, 42);
}

#[test]
fn test_import_parses_the_fixed_date_pattern() {
    let bytes = xlsx_of(&[
        &["Sensor", "Value", "Taken At"],
        &["t1", "1", "2020-01-02 03:04:05"],
    ]);
    let readings: Vec<Reading> =
        sheet::import_bytes("readings.xlsx", &bytes, Reading::default).unwrap();

    let expected =
        NaiveDateTime::parse_from_str("2020-01-02 03:04:05", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(readings[0].taken_at, Some(expected));
}

#[test]
fn test_import_leaves_empty_dates_unset() {
    let bytes = xlsx_of(&[&["Sensor", "Value", "Taken At"], &["t1", "1", ""]]);
    let readings: Vec<Reading> =
        sheet::import_bytes("readings.xlsx", &bytes, Reading::default).unwrap();
    assert_eq!(readings[0].taken_at, None);
}

#[test]
fn test_import_fails_on_unparsable_values() {
    let bytes = xlsx_of(&[&["Sensor", "Value"], &["t1", "not a number"]]);
    let err = sheet::import_bytes("readings.xlsx", &bytes, Reading::default)
        .unwrap_err();
    assert!(matches!(err, SheetError::TypeCoercion(_)));
}

#[test]
fn test_import_from_disk_path() {
    let bytes = xlsx_of(&[&["Sensor", "Value"], &["t1", "5"], &["t2", "6"]]);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("readings.xlsx");
    std::fs::write(&path, bytes).unwrap();

    let readings: Vec<Reading> = sheet::import_path(&path, Reading::default).unwrap();
    let values: Vec<i32> = readings.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![5, 6]);
}
