//! Ephemeris provider seam.
//!
//! The engine never computes astronomical positions itself; it consumes
//! a provider through the [`Ephemeris`] trait. Providers must be
//! deterministic for a given (time, graha) pair. Only Rahu among the
//! nodes is queried; Ketu is derived by the snapshot builder.

use std::error::Error;
use std::fmt::{Display, Formatter};

use gochara_base::Graha;

/// Instantaneous state of one body: sidereal longitude and rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Longitude rate in degrees/day; negative means retrograde.
    pub speed: f64,
}

impl BodyState {
    /// Whether the body is in retrograde motion.
    pub fn retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Errors an ephemeris provider may surface.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for the requested body.
    UnsupportedBody(Graha),
    /// The requested time falls outside the provider's coverage.
    OutOfRange(f64),
    /// Provider-internal failure.
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedBody(g) => write!(f, "no ephemeris data for {}", g.name()),
            Self::OutOfRange(jd) => write!(f, "JD {jd} outside ephemeris coverage"),
            Self::Provider(msg) => write!(f, "ephemeris provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Source of sidereal body positions.
pub trait Ephemeris {
    /// Sidereal state of a graha at a UT Julian day.
    fn body_state(&self, jd_ut: f64, graha: Graha) -> Result<BodyState, EphemerisError>;
}
