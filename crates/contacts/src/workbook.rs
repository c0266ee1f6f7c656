//! Spreadsheet access: content hashing and first-sheet extraction.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("no sheets found in {0}")]
    NoSheets(PathBuf),
}

/// Lowercase hex MD5 of the file contents.
pub fn file_hash(path: &Path) -> Result<String, WorkbookError> {
    let bytes = std::fs::read(path).map_err(|source| WorkbookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("{:x}", md5::compute(bytes)))
}

/// Rows of the first sheet as display strings.
///
/// Index 0 is spreadsheet row 1 even when the used range starts lower, cells
/// left of the used range are padded with empty strings, and trailing empty
/// cells are trimmed so that a blank row becomes an empty vector.
pub fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, WorkbookError> {
    let open_err = |source| WorkbookError::Open {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(open_err)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| WorkbookError::NoSheets(path.to_path_buf()))?;
    let range = workbook.worksheet_range(&first).map_err(open_err)?;

    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    for cells in range.rows() {
        let mut row = vec![String::new(); col_offset];
        row.extend(cells.iter().map(cell_text));
        while row.last().is_some_and(|c| c.trim().is_empty()) {
            row.pop();
        }
        rows.push(row);
    }

    Ok(rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_md5_hex() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seznam.xlsx");
        std::fs::write(&path, b"abc").unwrap();
        assert_eq!(file_hash(&path).unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_hash(&dir.path().join("none.xlsx")).unwrap_err();
        assert!(matches!(err, WorkbookError::Io { .. }));
    }

    #[test]
    fn garbage_is_not_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seznam.xlsx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();
        assert!(read_workbook_rows(&path).is_err());
    }

    #[test]
    fn rows_keep_spreadsheet_positions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seznam.xlsx");
        crate::fixture::write_directory(&path);

        let rows = read_workbook_rows(&path).unwrap();
        assert_eq!(rows.len(), 8);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["Telefonní seznam".to_string()]);
        assert_eq!(rows[3][0], "Malá Jana");
        assert_eq!(rows[3][2], "");
        assert_eq!(rows[3][3], "602123456");
        assert_eq!(rows[3][4], "245");
        assert_eq!(rows[4].len(), 3);
    }
}
