//! Record ↔ sheet mapping facade.
//!
//! This module wires the engines to the bundled backends:
//! - Import: file bytes or a path → `Vec<T>` for any [`SheetRecord`] type
//! - Export: `&[T]` → serialized workbook bytes, paginated across sheets
//!
//! The schema is resolved fresh on every call; the engines themselves only
//! see the abstract workbook capabilities and can be driven directly with
//! any backend.

mod exporter;
mod importer;

pub use exporter::{SheetExporter, DEFAULT_SHEET_SIZE};
pub use importer::SheetImporter;

use crate::error::SheetResult;
use crate::schema::{Schema, SheetRecord};
use crate::upload;
use crate::workbook::{self, writer_for, MemoryWorkbook};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Import records from a spreadsheet file; the kind is sniffed from the
/// file name.
pub fn import_path<T, F>(path: impl AsRef<Path>, factory: F) -> SheetResult<Vec<T>>
where
    T: SheetRecord,
    F: Fn() -> T,
{
    let workbook = workbook::load_path(path.as_ref())?;
    import_workbook(workbook, factory)
}

/// Import records from an uploaded file's name and bytes.
pub fn import_bytes<T, F>(filename: &str, data: &[u8], factory: F) -> SheetResult<Vec<T>>
where
    T: SheetRecord,
    F: Fn() -> T,
{
    let kind = upload::detect_file_kind(filename)?;
    let workbook = workbook::load_bytes(kind, data)?;
    import_workbook(workbook, factory)
}

fn import_workbook<T, F>(workbook: MemoryWorkbook, factory: F) -> SheetResult<Vec<T>>
where
    T: SheetRecord,
    F: Fn() -> T,
{
    let schema = Schema::<T>::of()?;
    let records = SheetImporter::new(workbook).import(&schema, factory)?;
    info!(records = records.len(), "import complete");
    Ok(records)
}

/// Export records into the sink through the bundled writer backend.
pub fn export_records<T: SheetRecord>(
    kind: &str,
    title: &str,
    sheet_size: Option<i32>,
    records: &[T],
    out: Option<&mut dyn Write>,
) -> SheetResult<()> {
    let exporter = SheetExporter::new(kind, title)?.with_sheet_size(sheet_size);
    let schema = Schema::<T>::of()?;
    let mut backend = writer_for(exporter.kind())?;
    exporter.export(records, &schema, &mut backend, out)?;
    info!(records = records.len(), kind, "export complete");
    Ok(())
}

/// Export records and return the serialized workbook bytes.
pub fn export_to_vec<T: SheetRecord>(
    kind: &str,
    title: &str,
    sheet_size: Option<i32>,
    records: &[T],
) -> SheetResult<Vec<u8>> {
    let mut buffer = Vec::new();
    export_records(kind, title, sheet_size, records, Some(&mut buffer))?;
    Ok(buffer)
}
