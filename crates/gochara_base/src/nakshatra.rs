//! Nakshatra (lunar mansion) computation for the 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each; each nakshatra has 4 padas (quarters) of
//! 3 deg 20'. Every nakshatra has a Vimshottari lord: the 9 grahas each
//! rule 3 nakshatras in cyclic order starting with Ketu at Ashwini.

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vimshottari lord of the nakshatra.
    ///
    /// The 9-graha lord sequence (Ketu, Shukra, Surya, Chandra, Mangal,
    /// Rahu, Guru, Shani, Buddh) repeats 3 times across the 27 nakshatras.
    pub const fn lord(self) -> Graha {
        match self.index() % 9 {
            0 => Graha::Ketu,
            1 => Graha::Shukra,
            2 => Graha::Surya,
            3 => Graha::Chandra,
            4 => Graha::Mangal,
            5 => Graha::Rahu,
            6 => Graha::Guru,
            7 => Graha::Shani,
            _ => Graha::Buddh,
        }
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn each_graha_rules_three() {
        use crate::graha::ALL_GRAHAS;
        for g in ALL_GRAHAS {
            let count = ALL_NAKSHATRAS.iter().filter(|n| n.lord() == g).count();
            assert_eq!(count, 3, "{} should rule 3 nakshatras", g.name());
        }
    }

    #[test]
    fn lord_sequence_anchors() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu); // second cycle
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn zero_longitude_is_ashwini_pada_1() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.nakshatra_index, 0);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn second_nakshatra_start() {
        // 13.4 deg is just inside Bharani, first pada
        let info = nakshatra_from_longitude(13.4);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert_eq!(info.nakshatra_index, 1);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn pada_boundaries() {
        // Pada spans within Ashwini: [0, 3.33), [3.33, 6.67), ...
        assert_eq!(nakshatra_from_longitude(PADA_SPAN).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN).pada, 4);
        assert_eq!(nakshatra_from_longitude(NAKSHATRA_SPAN - 1e-9).pada, 4);
    }

    #[test]
    fn wrap_invariance() {
        let a = nakshatra_from_longitude(200.0);
        let b = nakshatra_from_longitude(200.0 + 720.0);
        assert_eq!(a.nakshatra, b.nakshatra);
        assert_eq!(a.pada, b.pada);
    }

    #[test]
    fn negative_longitude_is_revati() {
        let info = nakshatra_from_longitude(-1.0);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.nakshatra_index, 26);
    }
}
