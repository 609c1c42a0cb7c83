//! Core chart geometry and period calculations for gochara analysis.
//!
//! This crate provides:
//! - Rashi, nakshatra and whole-sign house derivation from sidereal longitudes
//! - Drishti (aspect) geometry and double-aspect analysis
//! - Naisargika graha relationships and house categories
//! - The Vimshottari dasha hierarchy (mahadasha / antara / pratyantara)
//! - Jaimini chara karakas and the arudha pada table
//! - Degree-minute-second token parsing and formatting
//!
//! Everything here is a pure function of its inputs; ephemeris access and
//! chart storage live in the companion crates.

pub mod arudha;
pub mod chart;
pub mod dasha;
pub mod dms;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod karaka;
pub mod nakshatra;
pub mod rashi;
pub mod relations;
pub mod util;

pub use arudha::{ArudhaPada, arudha_padas};
pub use chart::{Chart, Position, PositionSet, whole_sign_house};
pub use dasha::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, active_periods, mahadashas, subdivide};
pub use dms::{Dms, deg_to_dms, dms_to_deg, format_dms, parse_dms};
pub use drishti::{
    AspectKind, AspectRecord, BodyAspect, DoubleAspectPair, DoubleAspectReport, DrishtiTable,
    aspect_target, body_aspects, single_aspects,
};
pub use error::BaseError;
pub use graha::{ALL_CHART_POINTS, ALL_GRAHAS, ChartPoint, Graha, SAPTA_GRAHAS, rashi_lord};
pub use karaka::{ALL_KARAKAS, Karaka, chara_karakas};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude, rashi_index};
pub use relations::{
    BodyNature, HouseCategory, Maitri, house_category, naisargika_maitri, natural_nature,
    sign_affinity,
};
pub use util::{house_distance, normalize_360, wrap_house};
