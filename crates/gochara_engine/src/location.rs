//! Place and timezone resolution seam.
//!
//! Chart construction needs birth coordinates and a UTC offset for the
//! birth place; the engine consumes a resolver through a trait and
//! surfaces its failures as typed errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Resolved geographic and timezone data for a place.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    /// Latitude in degrees (north positive).
    pub latitude: f64,
    /// Longitude in degrees (east positive).
    pub longitude: f64,
    /// IANA timezone identifier (e.g. `Asia/Kolkata`).
    pub timezone: String,
    /// UTC offset in hours at the queried local time.
    pub utc_offset_hours: f64,
}

/// Errors from place resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LocationError {
    /// The place name matched nothing.
    NotFound(String),
    /// Coordinates resolved but no timezone could be determined.
    TimezoneUndetermined(String),
}

impl Display for LocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(place) => write!(f, "place not found: '{place}'"),
            Self::TimezoneUndetermined(place) => {
                write!(f, "timezone could not be determined for '{place}'")
            }
        }
    }
}

impl Error for LocationError {}

/// Maps place names to coordinates and UTC offsets.
pub trait LocationResolver {
    /// Resolve a place name at a local date-time (`YYYY-MM-DD HH:MM`).
    fn resolve(&self, place: &str, local_datetime: &str) -> Result<LocationInfo, LocationError>;
}
