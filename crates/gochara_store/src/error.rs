//! Error types for the chart store.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reading or writing the chart record file.
#[derive(Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// I/O failure on the record file.
    Io(String),
    /// The record file is not valid JSON of the expected shape.
    Parse(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "chart store I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "chart store parse error: {msg}"),
        }
    }
}

impl Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
