use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("File not found or invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Required worksheet '{sheet}' not found in the workbook")]
    MissingSheet { sheet: String },

    #[error("Required column '{column}' not found in row 1 of sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read workbook: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
