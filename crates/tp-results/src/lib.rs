//! tp-results: CSV result log and post-run statistics.

pub mod csv_log;
pub mod reader;
pub mod summary;

pub use csv_log::{CSV_HEADER, CsvLogger};
pub use reader::{parse_log, read_log};
pub use summary::{ColumnStats, LogSummary, summarize};

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("Could not open {path} for writing: {source}")]
    SinkInit {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected header: {found:?}")]
    Header { found: String },

    #[error("Malformed record on line {line}: {message}")]
    Parse { line: usize, message: String },
}
