//! Chart model: positions, whole-sign houses, and the natal chart.
//!
//! A position carries a sidereal longitude plus everything derived from
//! it (rashi, nakshatra, pada) and the motion flag. Houses follow the
//! whole-sign system: the sign containing the lagna is house 1, and each
//! subsequent sign is the next house.

use crate::graha::{ALL_CHART_POINTS, ChartPoint, Graha};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude, rashi_index};

/// Whole-sign house of a longitude relative to a lagna longitude.
///
/// `house = ((sign(lon) - sign(lagna)) mod 12) + 1`, 1-based.
pub fn whole_sign_house(lon_deg: f64, lagna_lon_deg: f64) -> u8 {
    let sign = rashi_index(lon_deg) as i32;
    let lagna_sign = rashi_index(lagna_lon_deg) as i32;
    ((sign - lagna_sign).rem_euclid(12) + 1) as u8
}

/// A chart point's placement: longitude plus all derived attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Rashi occupied.
    pub rashi: Rashi,
    /// Nakshatra occupied.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees traversed within the nakshatra.
    pub degrees_in_nakshatra: f64,
    /// Whole-sign house relative to the chart's lagna, 1-based.
    pub house: u8,
    /// Retrograde motion flag. Always false for the lagna.
    pub retrograde: bool,
}

impl Position {
    /// Build a position from a sidereal longitude, deriving rashi,
    /// nakshatra, pada and house.
    pub fn from_longitude(lon_deg: f64, lagna_lon_deg: f64, retrograde: bool) -> Position {
        let lon = crate::util::normalize_360(lon_deg);
        let nak = nakshatra_from_longitude(lon);
        Position {
            longitude: lon,
            rashi: rashi_from_longitude(lon),
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            degrees_in_nakshatra: nak.degrees_in_nakshatra,
            house: whole_sign_house(lon, lagna_lon_deg),
            retrograde,
        }
    }
}

/// Positions of all 10 chart points, indexed by [`ChartPoint::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSet {
    positions: [Position; 10],
}

impl PositionSet {
    pub fn new(positions: [Position; 10]) -> PositionSet {
        PositionSet { positions }
    }

    /// Position of a chart point.
    pub fn position(&self, point: ChartPoint) -> &Position {
        &self.positions[point.index() as usize]
    }

    /// Position of a graha.
    pub fn graha(&self, graha: Graha) -> &Position {
        &self.positions[graha.index() as usize]
    }

    /// Position of the lagna.
    pub fn lagna(&self) -> &Position {
        &self.positions[ChartPoint::Lagna.index() as usize]
    }

    /// Iterate over (point, position) pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (ChartPoint, &Position)> {
        ALL_CHART_POINTS
            .iter()
            .map(move |p| (*p, &self.positions[p.index() as usize]))
    }
}

/// A natal chart: birth geometry plus the full set of point positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Chart holder's name.
    pub name: String,
    /// Birth latitude in degrees (north positive).
    pub latitude: f64,
    /// Birth longitude in degrees (east positive).
    pub longitude: f64,
    /// Birth instant as Julian day (UT). Absent for charts recorded
    /// without a birth time; dasha computation requires it.
    pub birth_jd: Option<f64>,
    /// Positions of all 10 chart points at birth.
    pub positions: PositionSet,
}

impl Chart {
    /// Sidereal longitude of the lagna.
    pub fn lagna_longitude(&self) -> f64 {
        self.positions.lagna().longitude
    }

    /// Rashi of the lagna (house 1 in the whole-sign system).
    pub fn lagna_rashi(&self) -> Rashi {
        self.positions.lagna().rashi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    fn position_set(lagna_lon: f64, graha_lons: [f64; 9]) -> PositionSet {
        let mut positions = [Position::from_longitude(lagna_lon, lagna_lon, false); 10];
        for (i, lon) in graha_lons.iter().enumerate() {
            positions[i] = Position::from_longitude(*lon, lagna_lon, false);
        }
        PositionSet::new(positions)
    }

    #[test]
    fn lagna_is_house_1() {
        assert_eq!(whole_sign_house(15.0, 15.0), 1);
        assert_eq!(whole_sign_house(29.999, 0.5), 1);
    }

    #[test]
    fn house_counts_forward_by_sign() {
        // Lagna in Mesha (0-30): Vrishabha is house 2, Meena is house 12.
        assert_eq!(whole_sign_house(35.0, 10.0), 2);
        assert_eq!(whole_sign_house(350.0, 10.0), 12);
    }

    #[test]
    fn house_wraps_across_meena() {
        // Lagna in Meena (330-360): Mesha is house 2.
        assert_eq!(whole_sign_house(5.0, 340.0), 2);
        assert_eq!(whole_sign_house(320.0, 340.0), 12);
    }

    #[test]
    fn sign_sweep_is_a_bijection_onto_houses() {
        // One longitude per sign must hit each of the 12 houses exactly once.
        for lagna_lon in [10.0, 100.0, 340.0] {
            let mut houses: Vec<u8> = (0..12)
                .map(|sign| whole_sign_house(sign as f64 * 30.0 + 15.0, lagna_lon))
                .collect();
            houses.sort_unstable();
            assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn same_sign_same_house_regardless_of_degree() {
        // Both points in Simha with lagna in Karka: house 2 for both.
        assert_eq!(whole_sign_house(120.1, 100.0), whole_sign_house(149.9, 100.0));
    }

    #[test]
    fn position_derives_all_attributes() {
        let p = Position::from_longitude(198.97, 100.0, true);
        assert_eq!(p.rashi, Rashi::Tula);
        assert_eq!(p.house, 4); // Tula(6) - Karka(3) = 3, +1
        assert_eq!(p.nakshatra, Nakshatra::Swati);
        assert!(p.retrograde);
    }

    #[test]
    fn position_normalizes_longitude() {
        let p = Position::from_longitude(-10.0, 0.0, false);
        assert!((p.longitude - 350.0).abs() < 1e-10);
        assert_eq!(p.rashi, Rashi::Meena);
    }

    #[test]
    fn position_set_lookup() {
        let set = position_set(100.0, [10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 40.0]);
        assert_eq!(set.graha(Graha::Surya).house, 10);
        assert_eq!(set.lagna().house, 1);
        for g in ALL_GRAHAS {
            assert_eq!(
                set.graha(g).house,
                set.position(ChartPoint::Graha(g)).house
            );
        }
    }
}
