//! Vimshottari dasha (planetary period) hierarchy.

pub mod types;
pub mod vimshottari;

pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, active_periods, elapsed_fraction,
    mahadasha_years, mahadashas, subdivide,
};
