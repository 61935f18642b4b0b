use crate::domain::model::MatchedRecord;
use crate::domain::ports::ResultSink;
use crate::utils::error::Result;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

const OUTPUT_SHEET: &str = "Matched Results";

// Output headers mirror the source labels; the production workbooks are
// Russian, so these stay Russian.
const HEADERS: [&str; 4] = ["ФИО", "Почта", "Имя компьютера", "IP"];

/// Writes the matched rows as a single-sheet .xlsx workbook: bold header
/// row on a light-gray fill, one row per record, columns autofitted.
#[derive(Debug, Default)]
pub struct XlsxSink;

impl XlsxSink {
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for XlsxSink {
    fn write_matches(&self, path: &Path, records: &[MatchedRecord]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet().set_name(OUTPUT_SHEET)?;

        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xD3D3D3));

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write(row, 0, &record.full_name)?;
            worksheet.write(row, 1, &record.email)?;
            worksheet.write(row, 2, &record.network_code)?;
            worksheet.write(row, 3, &record.ip)?;
        }

        worksheet.autofit();
        workbook.save(path)?;

        tracing::info!("Total matched records: {}", records.len());
        Ok(())
    }
}
