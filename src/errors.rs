use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, validating and reporting claims.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("output file already exists: {0}, back it up or remove it and run again")]
    OutputExists(PathBuf),
    #[error("entry with id {id} split into {count} fields, expected {expected}")]
    Structural {
        id: String,
        count: usize,
        expected: usize,
    },
    #[error("entry with id {id} has {field} \"{value}\" which is not {class}")]
    Content {
        id: String,
        field: String,
        value: String,
        class: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ReportError {
    /// True for errors that concern a single record rather than the whole run.
    pub fn is_record_error(&self) -> bool {
        matches!(self, ReportError::Structural { .. } | ReportError::Content { .. })
    }
}
