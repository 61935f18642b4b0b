use crate::core::{extract, matcher};
use crate::domain::model::{ExtractedTables, MatchedRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, ResultSink, WorkbookSource};
use crate::utils::error::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

pub struct MatchPipeline<S: WorkbookSource, K: ResultSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
    input_path: PathBuf,
}

impl<S: WorkbookSource, K: ResultSink, C: ConfigProvider> MatchPipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C, input_path: PathBuf) -> Self {
        Self {
            source,
            sink,
            config,
            input_path,
        }
    }

    /// Output lands next to the input file, stamped with local time so
    /// repeated runs never clobber earlier results.
    fn output_path(&self) -> PathBuf {
        let file_name = format!(
            "Matched_Results_{}.xlsx",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        self.input_path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(file_name)
    }
}

impl<S: WorkbookSource, K: ResultSink, C: ConfigProvider> Pipeline for MatchPipeline<S, K, C> {
    fn extract(&self) -> Result<ExtractedTables> {
        tracing::debug!("Reading sheet '{}'", self.config.persons_sheet());
        let person_rows = self.source.sheet_rows(self.config.persons_sheet())?;
        let persons = extract::extract_persons(&person_rows, &self.config)?;

        tracing::debug!("Reading sheet '{}'", self.config.sessions_sheet());
        let session_rows = self.source.sheet_rows(self.config.sessions_sheet())?;
        let sessions = extract::extract_sessions(&session_rows, &self.config)?;

        Ok(ExtractedTables { persons, sessions })
    }

    fn transform(&self, tables: ExtractedTables) -> Result<Vec<MatchedRecord>> {
        Ok(matcher::match_records(&tables.persons, &tables.sessions))
    }

    fn load(&self, matches: Vec<MatchedRecord>) -> Result<String> {
        let output_path = self.output_path();
        self.sink.write_matches(&output_path, &matches)?;
        Ok(output_path.to_string_lossy().into_owned())
    }
}
