//! Export surface tests against the bundled backends

use sheetmap::sheet::{self, SheetExporter};
use sheetmap::workbook::{load_bytes, writer_for};
use sheetmap::{FileKind, MemoryWorkbook, RecordFields, Schema, SheetError, SheetRecord, WorkbookRead};

#[derive(Debug, Default, Clone, PartialEq)]
struct Ticket {
    id: i32,
    subject: String,
}

impl SheetRecord for Ticket {
    fn fields() -> RecordFields<Self> {
        RecordFields::new()
            .int("id", "Id", |t: &Ticket| Some(t.id), |t, v| t.id = v)
            .text(
                "subject",
                "Subject",
                |t: &Ticket| Some(t.subject.clone()),
                |t, v| t.subject = v,
            )
    }
}

#[derive(Debug, Default)]
struct Opaque {
    _internal: u8,
}

impl SheetRecord for Opaque {
    fn fields() -> RecordFields<Self> {
        RecordFields::new().unmapped("_internal")
    }
}

fn tickets(n: usize) -> Vec<Ticket> {
    (0..n)
        .map(|i| Ticket {
            id: i as i32,
            subject: format!("ticket {}", i),
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_rejects_unrecognized_kind() {
    let err = sheet::export_to_vec("pdf", "tickets", None, &tickets(1)).unwrap_err();
    assert!(matches!(err, SheetError::UnsupportedFileKind(k) if k == "pdf"));
}

#[test]
fn test_export_rejects_record_type_without_mapped_fields() {
    let err = sheet::export_to_vec("xlsx", "opaque", None, &[Opaque::default()]).unwrap_err();
    assert!(matches!(err, SheetError::NoMappedFields));
}

#[test]
fn test_bundled_backend_has_no_legacy_xls_writer() {
    let err = sheet::export_to_vec("xls", "tickets", None, &tickets(1)).unwrap_err();
    assert!(matches!(err, SheetError::Backend(_)));
}

#[test]
fn test_engine_accepts_caller_supplied_backend_for_xls() {
    // The engine itself is kind-agnostic; an .xls export works against any
    // WorkbookWrite implementation the caller brings.
    let schema = Schema::<Ticket>::of().unwrap();
    let mut backend = MemoryWorkbook::new();
    let mut sink = Vec::new();
    SheetExporter::new("xls", "tickets")
        .unwrap()
        .export(&tickets(2), &schema, &mut backend, Some(&mut sink))
        .unwrap();
    assert_eq!(backend.sheet_count(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Serialized output
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_produces_an_xlsx_container() {
    let bytes = sheet::export_to_vec("xlsx", "tickets", None, &tickets(3)).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_of_empty_collection_reimports_as_empty() {
    let bytes = sheet::export_to_vec("xlsx", "tickets", None, &tickets(0)).unwrap();
    let workbook = load_bytes(FileKind::Xlsx, &bytes).unwrap();
    for sheet in 0..workbook.sheet_count() {
        assert_eq!(workbook.sheet_rows(sheet), Some(0));
    }
}

#[test]
fn test_export_pagination_names_sheets_with_page_index() {
    let bytes = sheet::export_to_vec("xlsx", "tickets", Some(10_000), &tickets(25_000)).unwrap();
    let workbook = load_bytes(FileKind::Xlsx, &bytes).unwrap();

    let names: Vec<String> = workbook
        .sheets()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(names, vec!["tickets0", "tickets1", "tickets2"]);
}

#[test]
fn test_export_single_page_keeps_bare_title() {
    let bytes = sheet::export_to_vec("xlsx", "tickets", Some(10_000), &tickets(5)).unwrap();
    let workbook = load_bytes(FileKind::Xlsx, &bytes).unwrap();
    assert_eq!(workbook.sheets().len(), 1);
    assert_eq!(workbook.sheets()[0].name, "tickets");
}

#[test]
fn test_export_header_row_lands_in_the_container() {
    let bytes = sheet::export_to_vec("xlsx", "tickets", None, &tickets(1)).unwrap();
    let workbook = load_bytes(FileKind::Xlsx, &bytes).unwrap();
    assert_eq!(workbook.cell(0, 0, 0).as_text(), "Id");
    assert_eq!(workbook.cell(0, 0, 1).as_text(), "Subject");
    assert_eq!(workbook.cell(0, 1, 0).as_text(), "0");
    assert_eq!(workbook.cell(0, 1, 1).as_text(), "ticket 0");
}

#[test]
fn test_writer_for_matches_kind_support() {
    assert!(writer_for(FileKind::Xlsx).is_ok());
    assert!(writer_for(FileKind::Xls).is_err());
}
