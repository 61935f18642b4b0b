pub mod xlsx_sink;
pub mod xlsx_source;

pub use xlsx_sink::XlsxSink;
pub use xlsx_source::XlsxSource;
