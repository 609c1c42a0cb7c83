//! Error types for base chart calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from geometry parsing and dasha resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// A `D°M'S''` degree token could not be parsed.
    MalformedDegree(String),
    /// The query time falls outside the computed dasha window.
    NoActivePeriod,
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDegree(token) => write!(f, "malformed degree string: '{token}'"),
            Self::NoActivePeriod => write!(f, "query time outside the dasha cycle window"),
        }
    }
}

impl Error for BaseError {}
