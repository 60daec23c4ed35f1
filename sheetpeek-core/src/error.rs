//! Error taxonomy for workbook reads

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening or reading a workbook
#[derive(Debug, Error)]
pub enum ReadError {
    /// The workbook path is missing or unreadable
    #[error("Cannot access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be decoded as a workbook
    #[error("{0}")]
    Format(#[from] calamine::Error),

    /// No sheet carries the requested name
    #[error("Worksheet named '{sheet}' not found")]
    SheetNotFound { sheet: String },

    /// Page number or page size below 1
    #[error("Invalid page window: page {number}, size {size} (both must be at least 1)")]
    InvalidPage { number: i64, size: i64 },
}

pub type Result<T> = std::result::Result<T, ReadError>;
