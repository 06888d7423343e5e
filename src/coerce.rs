//! Bidirectional value coercion between workbook cells and typed fields.
//!
//! The import direction works on the cell's string form, matching the
//! header-driven mapping convention: numbers arriving as text parse with the
//! target type's parser, fractional strings aimed at 32-bit integers
//! truncate toward zero, and date-times use one fixed pattern. The export
//! direction renders every field back to a string cell.

use crate::error::{SheetError, SheetResult};
use crate::schema::{FieldKind, FieldValue};
use crate::types::CellValue;
use chrono::NaiveDateTime;

/// Fixed pattern for date-time cells.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coerce a raw cell into a typed field value for `kind`.
///
/// Fails with [`SheetError::TypeCoercion`] on unparsable input. Returns
/// [`FieldValue::Unset`] where the policy leaves the target field at its
/// default: an empty date-time or an empty character source.
pub fn cell_to_field(cell: &CellValue, kind: FieldKind) -> SheetResult<FieldValue> {
    let text = cell.as_text();
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(text)),
        FieldKind::Int => {
            // Fractional strings truncate through f64; they do not round.
            if text.contains('.') {
                let d: f64 = text
                    .parse()
                    .map_err(|_| SheetError::coercion(&text, "a 32-bit integer"))?;
                Ok(FieldValue::Int(d as i32))
            } else {
                text.parse::<i32>()
                    .map(FieldValue::Int)
                    .map_err(|_| SheetError::coercion(&text, "a 32-bit integer"))
            }
        }
        FieldKind::Long => text
            .parse::<i64>()
            .map(FieldValue::Long)
            .map_err(|_| SheetError::coercion(&text, "a 64-bit integer")),
        FieldKind::Short => text
            .parse::<i16>()
            .map(FieldValue::Short)
            .map_err(|_| SheetError::coercion(&text, "a 16-bit integer")),
        FieldKind::Float => text
            .parse::<f32>()
            .map(FieldValue::Float)
            .map_err(|_| SheetError::coercion(&text, "a 32-bit float")),
        FieldKind::Double => text
            .parse::<f64>()
            .map(FieldValue::Double)
            .map_err(|_| SheetError::coercion(&text, "a 64-bit float")),
        FieldKind::DateTime => {
            if text.is_empty() {
                Ok(FieldValue::Unset)
            } else {
                NaiveDateTime::parse_from_str(&text, DATE_TIME_FORMAT)
                    .map(FieldValue::DateTime)
                    .map_err(|_| SheetError::coercion(&text, "a date-time (yyyy-MM-dd HH:mm:ss)"))
            }
        }
        FieldKind::Char => Ok(text
            .chars()
            .next()
            .map(FieldValue::Char)
            .unwrap_or(FieldValue::Unset)),
        FieldKind::Raw => Ok(FieldValue::Raw(cell.clone())),
    }
}

/// Render a typed field value back to a string cell.
///
/// Unset fields export as the empty string; date-times use the fixed
/// pattern; everything else takes the type's default string form.
pub fn field_to_cell(value: &FieldValue) -> CellValue {
    match value {
        FieldValue::Unset => CellValue::Text(String::new()),
        FieldValue::Text(s) => CellValue::Text(s.clone()),
        FieldValue::Int(n) => CellValue::Text(n.to_string()),
        FieldValue::Long(n) => CellValue::Text(n.to_string()),
        FieldValue::Short(n) => CellValue::Text(n.to_string()),
        FieldValue::Float(n) => CellValue::Text(n.to_string()),
        FieldValue::Double(n) => CellValue::Text(n.to_string()),
        FieldValue::Char(c) => CellValue::Text(c.to_string()),
        FieldValue::DateTime(dt) => CellValue::Text(dt.format(DATE_TIME_FORMAT).to_string()),
        FieldValue::Raw(cell) => CellValue::Text(cell.as_text()),
    }
}
