pub mod etl;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{ExtractedTables, MatchedRecord, PersonRecord, SessionRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ResultSink, WorkbookSource};
pub use crate::utils::error::Result;
