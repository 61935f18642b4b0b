use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Extracting records...");
        let tables = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} person records and {} session records",
            tables.persons.len(),
            tables.sessions.len()
        );

        let person_count = tables.persons.len();
        tracing::info!("Matching records...");
        let matches = self.pipeline.transform(tables)?;
        tracing::info!("Matched {} of {} persons", matches.len(), person_count);

        tracing::info!("Writing results...");
        let output_path = self.pipeline.load(matches)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
