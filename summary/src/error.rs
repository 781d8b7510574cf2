use std::io;
use std::path::PathBuf;

/// Everything that can abort a run. There is no partial report: the first
/// error wins and the caller gets nothing else.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("cannot open or map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line at byte {offset} has no ';' delimiter")]
    MissingDelimiter { offset: usize },

    #[error("invalid number {text:?} at byte {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("sum for key {key:?} overflows")]
    SumOverflow { key: String },

    #[error("key is not valid UTF-8: {key:?}")]
    InvalidKey { key: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
