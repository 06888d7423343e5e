//! Import engine: rows of cells into typed records.

use crate::coerce;
use crate::error::{SheetError, SheetResult};
use crate::schema::Schema;
use crate::workbook::WorkbookRead;
use tracing::debug;

/// Rows below this index are data; row 0 is always the header.
const HEADER_ROWS: usize = 1;

/// Drives row iteration and record construction over a readable workbook.
pub struct SheetImporter<W> {
    workbook: W,
}

impl<W: WorkbookRead> SheetImporter<W> {
    pub fn new(workbook: W) -> Self {
        Self { workbook }
    }

    /// Map every data row of every sheet into a record.
    ///
    /// Sheets are visited in document order, skipping structurally absent
    /// slots; rows in row order, skipping the header. Each record starts
    /// from the caller-supplied factory and is filled slot by slot; cells
    /// missing from a short row read as absent. A coercion failure aborts
    /// the whole call.
    pub fn import<T>(&self, schema: &Schema<T>, factory: impl Fn() -> T) -> SheetResult<Vec<T>> {
        if self.workbook.sheet_count() == 0 {
            return Err(SheetError::EmptyWorkbook);
        }
        if schema.is_empty() {
            return Err(SheetError::SchemaEmpty);
        }

        let mut records = Vec::new();
        for sheet in 0..self.workbook.sheet_count() {
            let Some(rows) = self.workbook.sheet_rows(sheet) else {
                continue;
            };
            debug!(sheet, rows, "importing sheet");
            for row in HEADER_ROWS..rows {
                if self.workbook.row_width(sheet, row) == 0 {
                    return Err(SheetError::DataEmpty);
                }
                let mut record = factory();
                for slot in schema.slots() {
                    let cell = self.workbook.cell(sheet, row, slot.column_index());
                    let value = coerce::cell_to_field(&cell, slot.kind())?;
                    slot.assign(&mut record, value);
                }
                records.push(record);
            }
        }
        Ok(records)
    }
}
