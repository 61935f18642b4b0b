use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::PathBuf;

/// Sheet and column labels default to the ones used by the production
/// workbooks; all of them can be overridden per run.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "excel-matcher")]
#[command(about = "Joins a people roster to network sessions by fuzzy username matching")]
pub struct CliConfig {
    /// Path to the input workbook; prompted for interactively when omitted
    pub input: Option<String>,

    #[arg(long, default_value = "Лист_1")]
    pub persons_sheet: String,

    #[arg(long, default_value = "Лист1")]
    pub sessions_sheet: String,

    #[arg(long, default_value = "ФИО")]
    pub name_column: String,

    #[arg(long, default_value = "Почта")]
    pub email_column: String,

    #[arg(long, default_value = "Сетевой код")]
    pub code_column: String,

    #[arg(long, default_value = "Учетная запись")]
    pub account_column: String,

    #[arg(long, default_value = "IP")]
    pub ip_column: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Returns the input path, prompting on stdin when none was given on
    /// the command line. The file must exist before any processing starts.
    pub fn resolve_input_path(&self) -> Result<PathBuf> {
        let raw = match &self.input {
            Some(path) => path.clone(),
            None => {
                print!("Enter the path to the Excel file: ");
                io::stdout().flush()?;
                let mut line = String::new();
                io::stdin().read_line(&mut line)?;
                line.trim().to_string()
            }
        };

        validation::validate_input_path(&raw)?;
        Ok(PathBuf::from(raw))
    }

    #[cfg(test)]
    pub fn default_for_tests() -> Self {
        Self::parse_from(["excel-matcher"])
    }
}

impl ConfigProvider for CliConfig {
    fn persons_sheet(&self) -> &str {
        &self.persons_sheet
    }

    fn sessions_sheet(&self) -> &str {
        &self.sessions_sheet
    }

    fn name_column(&self) -> &str {
        &self.name_column
    }

    fn email_column(&self) -> &str {
        &self.email_column
    }

    fn code_column(&self) -> &str {
        &self.code_column
    }

    fn account_column(&self) -> &str {
        &self.account_column
    }

    fn ip_column(&self) -> &str {
        &self.ip_column
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("persons_sheet", &self.persons_sheet)?;
        validation::validate_non_empty_string("sessions_sheet", &self.sessions_sheet)?;
        validation::validate_non_empty_string("name_column", &self.name_column)?;
        validation::validate_non_empty_string("email_column", &self.email_column)?;
        validation::validate_non_empty_string("code_column", &self.code_column)?;
        validation::validate_non_empty_string("account_column", &self.account_column)?;
        validation::validate_non_empty_string("ip_column", &self.ip_column)?;
        Ok(())
    }
}
