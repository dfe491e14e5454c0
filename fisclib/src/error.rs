//! Единый тип ошибок публичного API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiscError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, FiscError>;
