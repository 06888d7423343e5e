//! Abstract workbook capabilities and backends.
//!
//! The engines only ever talk to [`WorkbookRead`] and [`WorkbookWrite`];
//! the container codecs live behind these traits:
//! - [`MemoryWorkbook`] — plain in-memory implementation of both sides,
//!   JSON-serializable; the materialization target of the bundled reader
//!   and the natural test double.
//! - [`reader`] — calamine-backed loading of `.xls` / `.xlsx` bytes.
//! - [`writer`] — rust_xlsxwriter-backed `.xlsx` output.

use crate::error::{SheetError, SheetResult};
use crate::types::CellValue;
use serde::{Deserialize, Serialize};

pub mod reader;
pub mod writer;

pub use reader::{load_bytes, load_path};
pub use writer::{writer_for, XlsxWorkbook};

//==============================================================================
// Capabilities
//==============================================================================

/// Read side of a spreadsheet document: enumerate sheets, rows and cells.
pub trait WorkbookRead {
    /// Number of sheet slots in the document.
    fn sheet_count(&self) -> usize;

    /// Row count of a sheet, or `None` when the slot is structurally absent.
    fn sheet_rows(&self, sheet: usize) -> Option<usize>;

    /// Number of populated cells in a row.
    fn row_width(&self, sheet: usize, row: usize) -> usize;

    /// Cell at a position. Positions beyond the populated range read as
    /// [`CellValue::Empty`].
    fn cell(&self, sheet: usize, row: usize, col: usize) -> CellValue;
}

/// Write side of a spreadsheet document: create sheets and string cells,
/// then serialize the whole document once.
pub trait WorkbookWrite {
    /// Create a sheet with the given name; returns its index.
    fn create_sheet(&mut self, name: &str) -> SheetResult<usize>;

    /// Assign a string value to a cell, creating the row as needed.
    fn write_cell(&mut self, sheet: usize, row: u32, col: u16, value: &str) -> SheetResult<()>;

    /// Serialize the whole document to a byte buffer.
    fn save_to_buffer(&mut self) -> SheetResult<Vec<u8>>;
}

//==============================================================================
// In-memory workbook
//==============================================================================

/// One sheet of an in-memory workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

/// In-memory workbook implementing both capabilities.
///
/// Serializes to JSON, which makes it usable wherever a real container
/// format is not needed (tests, fixtures, debugging).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[MemorySheet] {
        &self.sheets
    }

    pub(crate) fn push_sheet(&mut self, sheet: MemorySheet) {
        self.sheets.push(sheet);
    }

    /// Deserialize a workbook previously produced by
    /// [`WorkbookWrite::save_to_buffer`].
    pub fn from_buffer(data: &[u8]) -> SheetResult<Self> {
        serde_json::from_slice(data)
            .map_err(|e| SheetError::Backend(format!("invalid memory workbook: {}", e)))
    }
}

impl WorkbookRead for MemoryWorkbook {
    fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    fn sheet_rows(&self, sheet: usize) -> Option<usize> {
        self.sheets.get(sheet).map(|s| s.rows.len())
    }

    fn row_width(&self, sheet: usize, row: usize) -> usize {
        self.sheets
            .get(sheet)
            .and_then(|s| s.rows.get(row))
            .map(|r| r.len())
            .unwrap_or(0)
    }

    fn cell(&self, sheet: usize, row: usize, col: usize) -> CellValue {
        self.sheets
            .get(sheet)
            .and_then(|s| s.rows.get(row))
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }
}

impl WorkbookWrite for MemoryWorkbook {
    fn create_sheet(&mut self, name: &str) -> SheetResult<usize> {
        self.sheets.push(MemorySheet {
            name: name.to_string(),
            rows: Vec::new(),
        });
        Ok(self.sheets.len() - 1)
    }

    fn write_cell(&mut self, sheet: usize, row: u32, col: u16, value: &str) -> SheetResult<()> {
        let sheet = self
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| SheetError::Backend(format!("no sheet at index {}", sheet)))?;
        let (row, col) = (row as usize, col as usize);
        if sheet.rows.len() <= row {
            sheet.rows.resize(row + 1, Vec::new());
        }
        let cells = &mut sheet.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = CellValue::Text(value.to_string());
        Ok(())
    }

    fn save_to_buffer(&mut self) -> SheetResult<Vec<u8>> {
        serde_json::to_vec(&*self)
            .map_err(|e| SheetError::Backend(format!("failed to serialize workbook: {}", e)))
    }
}
