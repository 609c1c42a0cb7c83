//! Graha (planet) enum, the lagna pseudo-point, and rashi lordship.
//!
//! The 9 grahas plus the lagna form the 10 chart symbols used as keys
//! throughout chart analysis. Rashi lordship is the universal Vedic
//! assignment from BPHS.

use crate::rashi::Rashi;

/// The 9 grahas: 7 classical planets plus the lunar nodes Rahu and Ketu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas, excluding Rahu and Ketu. These are the bodies
/// an ephemeris provider is queried for directly (Rahu is queried as the
/// mean node; Ketu is derived from Rahu).
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Look up a graha by its Sanskrit name (used by the chart store).
    pub fn from_name(name: &str) -> Option<Graha> {
        ALL_GRAHAS.iter().copied().find(|g| g.name() == name)
    }
}

/// The 10 chart symbols: 9 grahas plus the lagna (ascendant) pseudo-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPoint {
    Graha(Graha),
    Lagna,
}

/// All 10 chart points in storage order (grahas first, lagna last).
pub const ALL_CHART_POINTS: [ChartPoint; 10] = [
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Graha(Graha::Rahu),
    ChartPoint::Graha(Graha::Ketu),
    ChartPoint::Lagna,
];

impl ChartPoint {
    /// 0-based index into ALL_CHART_POINTS (grahas 0-8, lagna 9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Graha(g) => g.index(),
            Self::Lagna => 9,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.name(),
            Self::Lagna => "Lagna",
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}
