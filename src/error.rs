use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file name is empty")]
    EmptyFileName,

    #[error("cannot determine file type of '{0}'")]
    InvalidFileType(String),

    #[error("'{0}' is not a spreadsheet file")]
    UnsupportedExtension(String),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("record type declares no fields")]
    SchemaEmpty,

    #[error("record type has no mapped columns")]
    NoMappedFields,

    #[error("row contains no cell data")]
    DataEmpty,

    #[error("type coercion failed: {0}")]
    TypeCoercion(String),

    #[error("unsupported export file kind: '{0}'")]
    UnsupportedFileKind(String),

    #[error("no output target supplied")]
    NoOutputTarget,

    #[error("workbook backend error: {0}")]
    Backend(String),
}

impl SheetError {
    /// Coercion failure for a cell value that would not parse into `target`.
    pub(crate) fn coercion(value: &str, target: &str) -> Self {
        SheetError::TypeCoercion(format!("cannot parse '{}' as {}", value, target))
    }
}
