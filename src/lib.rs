//! Sheetmap - schema-driven mapping between spreadsheets and typed records
//!
//! This library maps tabular spreadsheet documents to collections of
//! strongly-typed records and back, driven by per-field column
//! declarations.
//!
//! # Features
//!
//! - Registration-time schemas: each record type declares its mapped
//!   fields once, in declaration order, with a header per column
//! - Bidirectional coercion between string cells and typed fields
//!   (integers, floats, chars, fixed-pattern date-times, raw passthrough)
//! - Chunked export: large collections paginate across sheets
//! - Abstract workbook seam with bundled `.xls`/`.xlsx` read and `.xlsx`
//!   write backends, plus a JSON-serializable in-memory workbook
//!
//! # Example
//!
//! ```no_run
//! use sheetmap::{RecordFields, SheetRecord};
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Contact {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl SheetRecord for Contact {
//!     fn fields() -> RecordFields<Self> {
//!         RecordFields::new()
//!             .text("name", "Name", |c: &Contact| Some(c.name.clone()), |c, v| c.name = v)
//!             .int("age", "Age", |c: &Contact| Some(c.age), |c, v| c.age = v)
//!     }
//! }
//!
//! let contacts = vec![Contact { name: "Ada".to_string(), age: 36 }];
//! let bytes = sheetmap::sheet::export_to_vec("xlsx", "contacts", None, &contacts)?;
//! let back: Vec<Contact> = sheetmap::sheet::import_bytes("contacts.xlsx", &bytes, Contact::default)?;
//! assert_eq!(back, contacts);
//! # Ok::<(), sheetmap::SheetError>(())
//! ```

pub mod coerce;
pub mod error;
pub mod schema;
pub mod sheet;
pub mod types;
pub mod upload;
pub mod workbook;

// Re-export commonly used types
pub use error::{SheetError, SheetResult};
pub use schema::{FieldKind, FieldValue, RecordFields, Schema, SheetRecord};
pub use sheet::{SheetExporter, SheetImporter};
pub use types::{CellValue, FileKind};
pub use workbook::{MemoryWorkbook, WorkbookRead, WorkbookWrite};
