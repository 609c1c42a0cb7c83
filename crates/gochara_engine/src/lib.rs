//! Transit analysis orchestration over the core chart geometry.
//!
//! This crate composes `gochara_base` primitives into complete
//! analyses: transit snapshots from an injected ephemeris provider,
//! per-house favorability scores, ruler and per-graha detail tables,
//! Sade Sati, the active dasha triple, and month-level summaries. The
//! serializable payload produced here is the boundary other surfaces
//! (CLI, services) marshal to their callers.

pub mod detail;
pub mod ephemeris;
pub mod error;
pub mod julian;
pub mod location;
pub mod monthly;
pub mod payload;
pub mod sade_sati;
pub mod score;
pub mod snapshot;

pub use detail::{GrahaDetail, PlacementQuality, graha_details};
pub use ephemeris::{BodyState, Ephemeris, EphemerisError};
pub use error::EngineError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
pub use location::{LocationError, LocationInfo, LocationResolver};
pub use monthly::{HouseMonthly, MonthlySummary, monthly_analysis};
pub use payload::{AnalysisPayload, analyze, chart_dasha, parse_query_date};
pub use sade_sati::{SadeSatiReport, sade_sati};
pub use score::{
    Band, Banding, HouseScore, RulerAssessment, assess_ruler, band_for, house_ruler, house_sign,
    score_houses,
};
pub use snapshot::transit_snapshot;
