use thiserror::Error;
use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid ngram size: {0}")]
    InvalidNgramSize(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn ngram_size<S: Into<String>>(msg: S) -> Self {
        Error::InvalidNgramSize(msg.into())
    }

    /// True for every error raised while validating construction parameters.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::InvalidNgramSize(_))
    }
}
