//! Error types for the Shot+ statistics service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShotPlusError>;

#[derive(Error, Debug)]
pub enum ShotPlusError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required column missing from dataset: {column}")]
    MissingColumn { column: String },
}
