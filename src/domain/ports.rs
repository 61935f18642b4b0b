use crate::domain::model::{ExtractedTables, MatchedRecord};
use crate::utils::error::Result;
use std::path::Path;

/// Read-side seam: a workbook exposed as sheets of raw cell text.
/// Rows come back in source order, header row first.
pub trait WorkbookSource {
    fn sheet_rows(&self, sheet: &str) -> Result<Vec<Vec<String>>>;
}

/// Write-side seam: persists the matched rows as a finished workbook.
pub trait ResultSink {
    fn write_matches(&self, path: &Path, records: &[MatchedRecord]) -> Result<()>;
}

/// Sheet and column labels are domain data (the production workbooks use
/// Russian headers), so they come from configuration rather than code.
pub trait ConfigProvider {
    fn persons_sheet(&self) -> &str;
    fn sessions_sheet(&self) -> &str;
    fn name_column(&self) -> &str;
    fn email_column(&self) -> &str;
    fn code_column(&self) -> &str;
    fn account_column(&self) -> &str;
    fn ip_column(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractedTables>;
    fn transform(&self, tables: ExtractedTables) -> Result<Vec<MatchedRecord>>;
    fn load(&self, matches: Vec<MatchedRecord>) -> Result<String>;
}
