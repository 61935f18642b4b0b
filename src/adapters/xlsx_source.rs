use crate::domain::ports::WorkbookSource;
use crate::utils::error::{MatchError, Result};
use calamine::{open_workbook, Reader, Xlsx};
use std::path::PathBuf;

/// Reads sheets out of an .xlsx workbook on disk via calamine. Cells come
/// back as their display text; empty cells become empty strings.
#[derive(Debug, Clone)]
pub struct XlsxSource {
    path: PathBuf,
}

impl XlsxSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl WorkbookSource for XlsxSource {
    fn sheet_rows(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)?;

        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(MatchError::MissingSheet {
                sheet: sheet.to_string(),
            });
        }

        let range = workbook.worksheet_range(sheet)?;
        Ok(range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect())
    }
}
