//! Error types for transit analysis orchestration.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gochara_base::BaseError;

use crate::ephemeris::EphemerisError;
use crate::location::LocationError;

/// Errors from building a transit analysis.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Chart geometry or dasha resolution failed.
    Base(BaseError),
    /// The ephemeris provider failed.
    Ephemeris(EphemerisError),
    /// Place or timezone resolution failed.
    Location(LocationError),
    /// Query date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Natal chart lacks the birth time needed for dasha computation.
    IncompleteNatalData,
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "chart calculation error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Location(e) => write!(f, "location error: {e}"),
            Self::InvalidDate(s) => write!(f, "invalid date input: '{s}' (expected YYYY-MM-DD)"),
            Self::IncompleteNatalData => write!(f, "natal chart has no birth time"),
        }
    }
}

impl Error for EngineError {}

impl From<BaseError> for EngineError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<EphemerisError> for EngineError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<LocationError> for EngineError {
    fn from(e: LocationError) -> Self {
        Self::Location(e)
    }
}
