// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a name-day dataset.
/// The transliteration core itself never fails.
#[derive(Debug, Error)]
pub enum NameDayError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid date key '{0}', expected MM-DD")]
    InvalidDateKey(String),

    #[error("date key '{0}' appears more than once")]
    DuplicateDateKey(String),

    #[error("empty name in the entry for {date}")]
    EmptyName { date: String },
}

pub type Result<T> = std::result::Result<T, NameDayError>;
