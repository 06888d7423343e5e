//! Export engine: typed records into paginated sheets.

use crate::coerce;
use crate::error::{SheetError, SheetResult};
use crate::schema::Schema;
use crate::types::FileKind;
use crate::workbook::WorkbookWrite;
use std::io::Write;
use tracing::debug;

/// Per-sheet record limit when the caller does not set one.
pub const DEFAULT_SHEET_SIZE: usize = 10_000;

/// Drives chunked sheet creation and cell population over a writable
/// workbook backend.
#[derive(Debug)]
pub struct SheetExporter {
    kind: FileKind,
    title: String,
    sheet_size: usize,
}

impl SheetExporter {
    /// Validate the export kind and fix the sheet title.
    ///
    /// Fails with [`SheetError::UnsupportedFileKind`] before any sheet
    /// exists.
    pub fn new(kind: &str, title: impl Into<String>) -> SheetResult<Self> {
        Ok(Self {
            kind: FileKind::parse(kind)?,
            title: title.into(),
            sheet_size: DEFAULT_SHEET_SIZE,
        })
    }

    /// Per-sheet record limit; `None` or a non-positive value falls back
    /// to [`DEFAULT_SHEET_SIZE`].
    pub fn with_sheet_size(mut self, size: Option<i32>) -> Self {
        self.sheet_size = match size {
            Some(n) if n > 0 => n as usize,
            _ => DEFAULT_SHEET_SIZE,
        };
        self
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Populate the backend page by page, then serialize it once into the
    /// output sink.
    ///
    /// Sheets are named `title{page}` when more than one page is needed,
    /// bare `title` otherwise. Row 0 of every sheet carries the headers in
    /// schema order.
    pub fn export<T, B>(
        &self,
        records: &[T],
        schema: &Schema<T>,
        backend: &mut B,
        out: Option<&mut dyn Write>,
    ) -> SheetResult<()>
    where
        B: WorkbookWrite + ?Sized,
    {
        let Some(out) = out else {
            return Err(SheetError::NoOutputTarget);
        };
        if schema.is_empty() {
            return Err(SheetError::SchemaEmpty);
        }

        let size = self.sheet_size;
        let mut pages = records.len() / size;
        if records.len() % size > 0 {
            pages += 1;
        }

        for page in 0..pages {
            let start = page * size;
            // Inherited boundary policy: the upper bound sits one short of
            // the page window unless clamped by the record count. See
            // DESIGN.md before "fixing" this.
            let bound = (page + 1) * size - 1;
            let end = if bound > records.len() {
                records.len()
            } else {
                bound
            };

            let name = if pages > 1 {
                format!("{}{}", self.title, page)
            } else {
                self.title.clone()
            };
            let sheet = backend.create_sheet(&name)?;
            debug!(page, start, end, sheet = %name, "exporting page");

            for (col, slot) in schema.slots().iter().enumerate() {
                backend.write_cell(sheet, 0, col as u16, slot.header())?;
            }
            let mut row: u32 = 1;
            for record in &records[start..end] {
                for (col, slot) in schema.slots().iter().enumerate() {
                    let cell = coerce::field_to_cell(&slot.read(record));
                    backend.write_cell(sheet, row, col as u16, &cell.as_text())?;
                }
                row += 1;
            }
        }

        let bytes = backend.save_to_buffer()?;
        out.write_all(&bytes)?;
        Ok(())
    }
}
