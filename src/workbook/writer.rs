//! rust_xlsxwriter-backed workbook output.

use crate::error::{SheetError, SheetResult};
use crate::types::FileKind;
use crate::workbook::WorkbookWrite;
use rust_xlsxwriter::Workbook;

/// Hand out the bundled writer backend for an export kind.
///
/// Only `.xlsx` has an ecosystem encoder; exporting the legacy `.xls`
/// container requires a caller-supplied [`WorkbookWrite`] implementation.
pub fn writer_for(kind: FileKind) -> SheetResult<XlsxWorkbook> {
    match kind {
        FileKind::Xlsx => Ok(XlsxWorkbook::new()),
        FileKind::Xls => Err(SheetError::Backend(
            "no bundled writer for legacy .xls workbooks; supply a WorkbookWrite implementation"
                .to_string(),
        )),
    }
}

/// `.xlsx` writer backend.
pub struct XlsxWorkbook {
    workbook: Workbook,
    sheets: usize,
}

impl std::fmt::Debug for XlsxWorkbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxWorkbook")
            .field("sheets", &self.sheets)
            .finish()
    }
}

impl XlsxWorkbook {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            sheets: 0,
        }
    }
}

impl Default for XlsxWorkbook {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookWrite for XlsxWorkbook {
    fn create_sheet(&mut self, name: &str) -> SheetResult<usize> {
        self.workbook
            .add_worksheet()
            .set_name(name)
            .map_err(|e| SheetError::Backend(format!("failed to name sheet '{}': {}", name, e)))?;
        let index = self.sheets;
        self.sheets += 1;
        Ok(index)
    }

    fn write_cell(&mut self, sheet: usize, row: u32, col: u16, value: &str) -> SheetResult<()> {
        let worksheet = self
            .workbook
            .worksheet_from_index(sheet)
            .map_err(|e| SheetError::Backend(format!("no sheet at index {}: {}", sheet, e)))?;
        worksheet
            .write_string(row, col, value)
            .map_err(|e| SheetError::Backend(format!("failed to write cell: {}", e)))?;
        Ok(())
    }

    fn save_to_buffer(&mut self) -> SheetResult<Vec<u8>> {
        self.workbook
            .save_to_buffer()
            .map_err(|e| SheetError::Backend(format!("failed to serialize workbook: {}", e)))
    }
}
