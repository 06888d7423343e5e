//! Record-type descriptors and schema resolution.
//!
//! A mappable record type declares its fields once, in declaration order,
//! through [`RecordFields`]: each field is either unmapped (invisible to
//! import and export) or bound to a display column with a header, a type
//! tag, and an accessor/mutator pair. [`Schema::resolve`] turns that
//! declaration into the ordered slot table both engines consume.

use crate::error::{SheetError, SheetResult};
use crate::types::CellValue;
use chrono::NaiveDateTime;

//==============================================================================
// Field type tags and values
//==============================================================================

/// Closed set of field types the coercer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    /// String field
    Text,
    /// 32-bit integer field
    Int,
    /// 64-bit integer field
    Long,
    /// 16-bit integer field
    Short,
    /// 32-bit float field
    Float,
    /// 64-bit float field
    Double,
    /// Single-character field
    Char,
    /// Date-time field, fixed `yyyy-MM-dd HH:mm:ss` pattern
    DateTime,
    /// Passthrough field holding the raw cell value, no conversion
    Raw,
}

impl FieldKind {
    /// Get the tag name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Int => "Int",
            FieldKind::Long => "Long",
            FieldKind::Short => "Short",
            FieldKind::Float => "Float",
            FieldKind::Double => "Double",
            FieldKind::Char => "Char",
            FieldKind::DateTime => "DateTime",
            FieldKind::Raw => "Raw",
        }
    }
}

/// A typed field value moving between a record and the coercer.
///
/// One variant per [`FieldKind`], plus [`FieldValue::Unset`] which leaves
/// the target field at whatever default the record factory produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i32),
    Long(i64),
    Short(i16),
    Float(f32),
    Double(f64),
    Char(char),
    DateTime(NaiveDateTime),
    Raw(CellValue),
    /// No value; the target field stays untouched
    Unset,
}

type Getter<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, FieldValue) + Send + Sync>;

//==============================================================================
// Record-type descriptor
//==============================================================================

struct ColumnDef<T> {
    header: String,
    kind: FieldKind,
    get: Getter<T>,
    set: Setter<T>,
}

struct FieldDef<T> {
    name: &'static str,
    /// None = declared but not mapped to a column
    column: Option<ColumnDef<T>>,
}

/// Declaration-ordered field table for one record type.
///
/// Built through the per-kind registration methods; fields registered with
/// [`RecordFields::unmapped`] count as declared but are invisible to both
/// import and export.
pub struct RecordFields<T> {
    defs: Vec<FieldDef<T>>,
}

impl<T> Default for RecordFields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordFields<T> {
    pub fn new() -> Self {
        Self { defs: Vec::new() }
    }

    /// Declare a field that carries no column mapping.
    pub fn unmapped(mut self, name: &'static str) -> Self {
        self.defs.push(FieldDef { name, column: None });
        self
    }

    fn mapped(
        mut self,
        name: &'static str,
        header: &str,
        kind: FieldKind,
        get: Getter<T>,
        set: Setter<T>,
    ) -> Self {
        self.defs.push(FieldDef {
            name,
            column: Some(ColumnDef {
                header: header.to_string(),
                kind,
                get,
                set,
            }),
        });
        self
    }

    /// Map a `String` field.
    pub fn text<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<String> + Send + Sync + 'static,
        S: Fn(&mut T, String) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Text,
            Box::new(move |r| get(r).map(FieldValue::Text).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Text(s) = v {
                    set(r, s);
                }
            }),
        )
    }

    /// Map an `i32` field.
    pub fn int<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<i32> + Send + Sync + 'static,
        S: Fn(&mut T, i32) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Int,
            Box::new(move |r| get(r).map(FieldValue::Int).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Int(n) = v {
                    set(r, n);
                }
            }),
        )
    }

    /// Map an `i64` field.
    pub fn long<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<i64> + Send + Sync + 'static,
        S: Fn(&mut T, i64) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Long,
            Box::new(move |r| get(r).map(FieldValue::Long).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Long(n) = v {
                    set(r, n);
                }
            }),
        )
    }

    /// Map an `i16` field.
    pub fn short<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<i16> + Send + Sync + 'static,
        S: Fn(&mut T, i16) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Short,
            Box::new(move |r| get(r).map(FieldValue::Short).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Short(n) = v {
                    set(r, n);
                }
            }),
        )
    }

    /// Map an `f32` field.
    pub fn float<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<f32> + Send + Sync + 'static,
        S: Fn(&mut T, f32) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Float,
            Box::new(move |r| get(r).map(FieldValue::Float).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Float(n) = v {
                    set(r, n);
                }
            }),
        )
    }

    /// Map an `f64` field.
    pub fn double<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<f64> + Send + Sync + 'static,
        S: Fn(&mut T, f64) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Double,
            Box::new(move |r| get(r).map(FieldValue::Double).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Double(n) = v {
                    set(r, n);
                }
            }),
        )
    }

    /// Map a `char` field.
    pub fn character<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<char> + Send + Sync + 'static,
        S: Fn(&mut T, char) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Char,
            Box::new(move |r| get(r).map(FieldValue::Char).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Char(c) = v {
                    set(r, c);
                }
            }),
        )
    }

    /// Map a `NaiveDateTime` field.
    pub fn date_time<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<NaiveDateTime> + Send + Sync + 'static,
        S: Fn(&mut T, NaiveDateTime) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::DateTime,
            Box::new(move |r| {
                get(r)
                    .map(FieldValue::DateTime)
                    .unwrap_or(FieldValue::Unset)
            }),
            Box::new(move |r, v| {
                if let FieldValue::DateTime(dt) = v {
                    set(r, dt);
                }
            }),
        )
    }

    /// Map a passthrough field holding the raw cell value.
    pub fn raw<G, S>(self, name: &'static str, header: &str, get: G, set: S) -> Self
    where
        G: Fn(&T) -> Option<CellValue> + Send + Sync + 'static,
        S: Fn(&mut T, CellValue) + Send + Sync + 'static,
    {
        self.mapped(
            name,
            header,
            FieldKind::Raw,
            Box::new(move |r| get(r).map(FieldValue::Raw).unwrap_or(FieldValue::Unset)),
            Box::new(move |r, v| {
                if let FieldValue::Raw(c) = v {
                    set(r, c);
                }
            }),
        )
    }
}

/// A record type that can be mapped to and from sheets.
pub trait SheetRecord: Sized {
    /// The field table, in declaration order.
    fn fields() -> RecordFields<Self>;
}

//==============================================================================
// Resolved schema
//==============================================================================

/// One resolved mapped field: column position, header, type tag and the
/// accessor/mutator pair bound to the record type.
pub struct FieldSlot<T> {
    column_index: usize,
    name: &'static str,
    header: String,
    kind: FieldKind,
    get: Getter<T>,
    set: Setter<T>,
}

impl<T> FieldSlot<T> {
    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Read the field's current value out of a record.
    pub fn read(&self, record: &T) -> FieldValue {
        (self.get)(record)
    }

    /// Write a coerced value into a record. `Unset` leaves the field at the
    /// factory default.
    pub fn assign(&self, record: &mut T, value: FieldValue) {
        if !matches!(value, FieldValue::Unset) {
            (self.set)(record, value);
        }
    }
}

/// Ordered slot table for one record type.
///
/// Only constructible through [`Schema::resolve`], so a schema always holds
/// at least one mapped field. Immutable once built; safe to reuse across
/// many import/export calls for the same type.
pub struct Schema<T> {
    slots: Vec<FieldSlot<T>>,
}

impl<T> std::fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl<T> Schema<T> {
    /// Resolve a field table into a schema.
    ///
    /// Scans the declarations in order and keeps the mapped ones, assigning
    /// contiguous column indices from 0. Duplicate headers are permitted.
    pub fn resolve(fields: RecordFields<T>) -> SheetResult<Self> {
        if fields.defs.is_empty() {
            return Err(SheetError::SchemaEmpty);
        }
        let mut slots = Vec::new();
        for def in fields.defs {
            if let Some(col) = def.column {
                slots.push(FieldSlot {
                    column_index: slots.len(),
                    name: def.name,
                    header: col.header,
                    kind: col.kind,
                    get: col.get,
                    set: col.set,
                });
            }
        }
        if slots.is_empty() {
            return Err(SheetError::NoMappedFields);
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[FieldSlot<T>] {
        &self.slots
    }

    /// Header texts in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.header()).collect()
    }
}

impl<T: SheetRecord> Schema<T> {
    /// Resolve the schema straight from the record type.
    pub fn of() -> SheetResult<Self> {
        Self::resolve(T::fields())
    }
}
