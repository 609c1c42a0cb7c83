//! Core types for Vimshottari dasha (planetary period) calculations.

use crate::graha::Graha;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The 3 hierarchical dasha levels exposed by the period engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antara = 1,
    Pratyantara = 2,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antara => "Antara",
            Self::Pratyantara => "Pratyantara",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antara),
            Self::Antara => Some(Self::Pratyantara),
            Self::Pratyantara => None,
        }
    }
}

/// One dasha period at some level of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// Level in the hierarchy.
    pub level: DashaLevel,
    /// Ruling graha of the period.
    pub graha: Graha,
    /// Ruling graha of the parent period (None at mahadasha level).
    pub parent: Option<Graha>,
    /// Period start as Julian day (UT), inclusive.
    pub start_jd: f64,
    /// Period end as Julian day (UT), exclusive.
    pub end_jd: f64,
    /// Fraction of the full 120-year cycle this period represents.
    pub cycle_fraction: f64,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether a Julian day instant falls within the period.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_levels() {
        assert_eq!(DashaLevel::Mahadasha.child_level(), Some(DashaLevel::Antara));
        assert_eq!(DashaLevel::Antara.child_level(), Some(DashaLevel::Pratyantara));
        assert_eq!(DashaLevel::Pratyantara.child_level(), None);
    }

    #[test]
    fn period_contains_half_open() {
        let p = DashaPeriod {
            level: DashaLevel::Mahadasha,
            graha: Graha::Ketu,
            parent: None,
            start_jd: 100.0,
            end_jd: 200.0,
            cycle_fraction: 7.0 / 120.0,
        };
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
        assert!(!p.contains(99.999));
        assert!((p.duration_days() - 100.0).abs() < 1e-10);
    }
}
