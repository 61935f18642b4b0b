pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{XlsxSink, XlsxSource};
pub use crate::config::CliConfig;
pub use crate::core::{etl::MatchEngine, pipeline::MatchPipeline};
pub use crate::domain::model::{ExtractedTables, MatchedRecord, PersonRecord, SessionRecord};
pub use crate::utils::error::{MatchError, Result};
