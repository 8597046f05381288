use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LongvisionError {
    #[error("Duration probe failed for {path}: {reason}")]
    ProbeFailed { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LongvisionError>;
