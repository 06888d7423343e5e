//! Filename checks for uploaded spreadsheet files.
//!
//! The engines never see file names; this is the glue that turns an
//! uploaded file's name into a [`FileKind`] before the bytes reach a
//! workbook backend.

use crate::error::{SheetError, SheetResult};
use crate::types::FileKind;
use std::ffi::OsStr;
use std::path::Path;

/// Determine the spreadsheet kind from a file name's extension.
///
/// Extensions match exactly (`"xls"` / `"xlsx"`, lower case), the same way
/// the export kind strings do.
pub fn detect_file_kind(filename: &str) -> SheetResult<FileKind> {
    if filename.is_empty() {
        return Err(SheetError::EmptyFileName);
    }
    let extension = Path::new(filename).extension().and_then(OsStr::to_str);
    match extension {
        None | Some("") => Err(SheetError::InvalidFileType(filename.to_string())),
        Some("xls") => Ok(FileKind::Xls),
        Some("xlsx") => Ok(FileKind::Xlsx),
        Some(_) => Err(SheetError::UnsupportedExtension(filename.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_recognized_extensions() {
        assert_eq!(detect_file_kind("report.xls").unwrap(), FileKind::Xls);
        assert_eq!(detect_file_kind("report.xlsx").unwrap(), FileKind::Xlsx);
        assert_eq!(detect_file_kind("dir/report.xlsx").unwrap(), FileKind::Xlsx);
    }

    #[test]
    fn test_detect_empty_name() {
        assert!(matches!(
            detect_file_kind("").unwrap_err(),
            SheetError::EmptyFileName
        ));
    }

    #[test]
    fn test_detect_missing_extension() {
        assert!(matches!(
            detect_file_kind("report").unwrap_err(),
            SheetError::InvalidFileType(_)
        ));
        assert!(matches!(
            detect_file_kind("report.").unwrap_err(),
            SheetError::InvalidFileType(_)
        ));
    }

    #[test]
    fn test_detect_foreign_extension() {
        assert!(matches!(
            detect_file_kind("report.pdf").unwrap_err(),
            SheetError::UnsupportedExtension(_)
        ));
        // Exact-match policy: upper-case variants are not recognized.
        assert!(matches!(
            detect_file_kind("report.XLSX").unwrap_err(),
            SheetError::UnsupportedExtension(_)
        ));
    }
}
