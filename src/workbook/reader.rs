//! calamine-backed workbook loading.
//!
//! Both container kinds are materialized into a [`MemoryWorkbook`] up
//! front; reading the document is the one bulk I/O operation of an import
//! call. Absolute row positions are preserved so the header-row convention
//! survives sheets whose data does not start at the top.

use crate::coerce::DATE_TIME_FORMAT;
use crate::error::{SheetError, SheetResult};
use crate::types::{CellValue, FileKind};
use crate::upload;
use crate::workbook::{MemorySheet, MemoryWorkbook};
use calamine::{Data, Range, Reader, Xls, Xlsx};
use std::ffi::OsStr;
use std::io::Cursor;
use std::path::Path;

/// Load a workbook from a file path; the kind is sniffed from the name.
pub fn load_path(path: impl AsRef<Path>) -> SheetResult<MemoryWorkbook> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    let kind = upload::detect_file_kind(name)?;
    let data = std::fs::read(path)?;
    load_bytes(kind, &data)
}

/// Load a workbook of a known kind from raw bytes.
pub fn load_bytes(kind: FileKind, data: &[u8]) -> SheetResult<MemoryWorkbook> {
    let cursor = Cursor::new(data);
    match kind {
        FileKind::Xls => {
            let mut workbook = Xls::new(cursor)
                .map_err(|e| SheetError::Backend(format!("failed to open xls workbook: {}", e)))?;
            collect(&mut workbook)
        }
        FileKind::Xlsx => {
            let mut workbook = Xlsx::new(cursor)
                .map_err(|e| SheetError::Backend(format!("failed to open xlsx workbook: {}", e)))?;
            collect(&mut workbook)
        }
    }
}

fn collect<RS, R>(workbook: &mut R) -> SheetResult<MemoryWorkbook>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let mut out = MemoryWorkbook::new();
    for name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| SheetError::Backend(format!("failed to read sheet '{}': {}", name, e)))?;
        out.push_sheet(MemorySheet {
            name,
            rows: materialize(&range),
        });
    }
    Ok(out)
}

/// Flatten a used range into absolute-indexed rows, trimming trailing
/// empty cells per row.
fn materialize(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };
    let mut rows = Vec::with_capacity(end_row as usize + 1);
    for r in 0..=end_row {
        let mut cells: Vec<CellValue> = (0..=end_col)
            .map(|c| convert(range.get_value((r, c))))
            .collect();
        while matches!(cells.last(), Some(CellValue::Empty)) {
            cells.pop();
        }
        rows.push(cells);
    }
    rows
}

fn convert(data: Option<&Data>) -> CellValue {
    match data {
        None | Some(Data::Empty) | Some(Data::Error(_)) => CellValue::Empty,
        Some(Data::String(s)) => CellValue::Text(s.clone()),
        Some(Data::Float(f)) => CellValue::Number(*f),
        Some(Data::Int(i)) => CellValue::Number(*i as f64),
        // Booleans carry no dedicated cell variant; they read as text.
        Some(Data::Bool(b)) => CellValue::Text(b.to_string()),
        // Native datetime cells render through the fixed pattern so they
        // can land in DateTime fields; the serial number is the fallback.
        Some(Data::DateTime(dt)) => match dt.as_datetime() {
            Some(d) => CellValue::Text(d.format(DATE_TIME_FORMAT).to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
    }
}
