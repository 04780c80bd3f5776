use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    /// At least one input field is empty, non-numeric, zero or negative.
    #[error("all values must be positive, non-zero numbers")]
    InvalidValues,

    #[error("expected {expected} values ({fields}), got {got}")]
    WrongValueCount {
        expected: usize,
        got: usize,
        fields: &'static str,
    },

    #[error("input ended unexpectedly (EOF)")]
    UnexpectedEof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
