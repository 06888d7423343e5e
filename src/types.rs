use crate::error::{SheetError, SheetResult};
use serde::{Deserialize, Serialize};
use std::fmt;

//==============================================================================
// File kinds
//==============================================================================

/// Spreadsheet container variants the engine recognizes.
///
/// Exactly two kinds exist; every other kind string is rejected with
/// [`SheetError::UnsupportedFileKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    /// Legacy binary workbook (`.xls`)
    Xls,
    /// Office Open XML workbook (`.xlsx`)
    Xlsx,
}

impl FileKind {
    /// Parse an export kind string (`"xls"` / `"xlsx"`).
    pub fn parse(kind: &str) -> SheetResult<Self> {
        match kind {
            "xls" => Ok(FileKind::Xls),
            "xlsx" => Ok(FileKind::Xlsx),
            other => Err(SheetError::UnsupportedFileKind(other.to_string())),
        }
    }

    /// The file extension this kind is stored under.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Xls => "xls",
            FileKind::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

//==============================================================================
// Cell values
//==============================================================================

/// The value variant exchanged with workbook backends.
///
/// Cells are either textual, numeric, or absent. The crate-wide convention
/// for absent cells is the empty string form; the literal `"null"` is never
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Textual cell content
    Text(String),
    /// Numeric cell content
    Number(f64),
    /// Absent / blank cell
    Empty,
}

impl CellValue {
    /// The cell's string form, as seen by the coercer.
    ///
    /// Numbers render through `Display`, so `42.0` reads back as `"42"`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Whether the cell is absent.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the variant name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "Text",
            CellValue::Number(_) => "Number",
            CellValue::Empty => "Empty",
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}
