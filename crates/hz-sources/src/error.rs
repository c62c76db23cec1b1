use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Malformed corpus line {line}: {message}")]
    MalformedCorpus { line: usize, message: String },
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] hz_core::HzError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
