//! Vimshottari dasha: the 120-year nakshatra-based period system.
//!
//! The Moon's natal nakshatra determines the anchor graha, and the
//! fraction of the nakshatra already traversed at birth determines how
//! far into the anchor's mahadasha the birth falls. Mahadashas run in a
//! fixed 9-graha sequence totalling 120 years; each period subdivides
//! into 9 proportional children starting cyclically from its own graha.

use crate::error::BaseError;
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, PADA_SPAN, nakshatra_from_longitude};
use crate::util::normalize_360;

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// The Vimshottari sequence with mahadasha lengths in years (sum 120).
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Total cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the Vimshottari sequence.
fn sequence_index(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == graha)
        .unwrap_or(0)
}

/// Mahadasha length of a graha in years.
pub fn mahadasha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_index(graha)].1
}

/// Fraction of the anchor mahadasha elapsed at birth.
///
/// Combines the degrees traversed within the Moon's nakshatra with the
/// pada offset; a combined value reaching 1.0 wraps back by one whole
/// unit so the result stays in [0, 1).
pub fn elapsed_fraction(moon_sidereal_lon: f64) -> f64 {
    let info = nakshatra_from_longitude(normalize_360(moon_sidereal_lon));
    let mut fraction =
        (info.degrees_in_nakshatra + (info.pada - 1) as f64 * PADA_SPAN) / NAKSHATRA_SPAN;
    if fraction >= 1.0 {
        fraction -= 1.0;
    }
    fraction
}

/// Generate the 9 mahadashas of the cycle containing the birth.
///
/// The anchor graha is the lord of the Moon's natal nakshatra. Its
/// mahadasha is back-dated so that the elapsed fraction falls before the
/// birth instant; all 9 periods carry their full durations and run
/// contiguously from there.
pub fn mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let info = nakshatra_from_longitude(normalize_360(moon_sidereal_lon));
    let anchor = info.nakshatra.lord();
    let anchor_idx = sequence_index(anchor);

    let anchor_days = mahadasha_years(anchor) * DAYS_PER_YEAR;
    let mut cursor = birth_jd - elapsed_fraction(moon_sidereal_lon) * anchor_days;

    let mut periods = Vec::with_capacity(9);
    for offset in 0..9 {
        let (graha, years) = VIMSHOTTARI_SEQUENCE[(anchor_idx + offset) % 9];
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            level: DashaLevel::Mahadasha,
            graha,
            parent: None,
            start_jd: cursor,
            end_jd: end,
            cycle_fraction: years / VIMSHOTTARI_TOTAL_YEARS,
        });
        cursor = end;
    }
    periods
}

/// Subdivide a period into its 9 proportional children.
///
/// Children run cyclically starting from the parent's own graha; each
/// child's share of the parent is its mahadasha years over 120. The last
/// child's end is snapped to the parent's end to absorb floating-point
/// drift. Returns an empty vector at the deepest level.
pub fn subdivide(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let child_level = match parent.level.child_level() {
        Some(l) => l,
        None => return Vec::new(),
    };

    let parent_duration = parent.duration_days();
    let start_idx = sequence_index(parent.graha);
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for offset in 0..9 {
        let (graha, years) = VIMSHOTTARI_SEQUENCE[(start_idx + offset) % 9];
        let share = years / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + share * parent_duration;
        children.push(DashaPeriod {
            level: child_level,
            graha,
            parent: Some(parent.graha),
            start_jd: cursor,
            end_jd: end,
            cycle_fraction: parent.cycle_fraction * share,
        });
        cursor = end;
    }

    // Snap the last child's end to absorb floating-point drift.
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

fn find_containing(periods: &[DashaPeriod], jd: f64) -> Result<DashaPeriod, BaseError> {
    periods
        .iter()
        .find(|p| p.contains(jd))
        .copied()
        .ok_or(BaseError::NoActivePeriod)
}

/// Resolve the active mahadasha, antara and pratyantara for an instant.
///
/// Fails with [`BaseError::NoActivePeriod`] when the query time falls
/// outside the 120-year cycle containing the birth.
pub fn active_periods(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Result<(DashaPeriod, DashaPeriod, DashaPeriod), BaseError> {
    let maha = find_containing(&mahadashas(birth_jd, moon_sidereal_lon), query_jd)?;
    let antara = find_containing(&subdivide(&maha), query_jd)?;
    let pratyantara = find_containing(&subdivide(&antara), query_jd)?;
    Ok((maha, antara, pratyantara))
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: f64 = 2451545.0;

    #[test]
    fn sequence_sums_to_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-10);
    }

    #[test]
    fn anchor_from_moon_nakshatra() {
        // Moon at 0 deg is in Ashwini, ruled by Ketu.
        let periods = mahadashas(J2000, 0.0);
        assert_eq!(periods[0].graha, Graha::Ketu);
        // Moon in Rohini (40-53.3 deg) anchors Chandra.
        let periods = mahadashas(J2000, 45.0);
        assert_eq!(periods[0].graha, Graha::Chandra);
    }

    #[test]
    fn nine_contiguous_full_periods() {
        let periods = mahadashas(J2000, 100.0);
        assert_eq!(periods.len(), 9);
        for w in periods.windows(2) {
            assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
        }
        for p in &periods {
            let expected = mahadasha_years(p.graha) * DAYS_PER_YEAR;
            assert!((p.duration_days() - expected).abs() < 1e-6);
        }
        let total = periods[8].end_jd - periods[0].start_jd;
        assert!((total - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn birth_at_nakshatra_start_begins_anchor() {
        // Moon exactly at 0 deg: nothing elapsed, anchor starts at birth.
        let periods = mahadashas(J2000, 0.0);
        assert!((periods[0].start_jd - J2000).abs() < 1e-9);
    }

    #[test]
    fn elapsed_fraction_back_dates_start() {
        // Moon in pada 2 of Ashwini: the combined fraction double-counts
        // the pada offset, so the start is pulled back accordingly.
        let lon = PADA_SPAN + 0.5;
        let frac = elapsed_fraction(lon);
        let periods = mahadashas(J2000, lon);
        let anchor_days = 7.0 * DAYS_PER_YEAR;
        assert!((periods[0].start_jd - (J2000 - frac * anchor_days)).abs() < 1e-9);
        assert!(periods[0].contains(J2000));
    }

    #[test]
    fn elapsed_fraction_wraps_below_one() {
        // Late pada 4 pushes the combined value past 1.0; it wraps.
        let lon = NAKSHATRA_SPAN - 0.01;
        let frac = elapsed_fraction(lon);
        assert!((0.0..1.0).contains(&frac));
    }

    #[test]
    fn subdivide_starts_from_parent_graha() {
        let periods = mahadashas(J2000, 0.0);
        let children = subdivide(&periods[0]);
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].graha, periods[0].graha);
        assert_eq!(children[0].parent, Some(periods[0].graha));
        assert_eq!(children[0].level, DashaLevel::Antara);
    }

    #[test]
    fn subdivide_partitions_parent() {
        let periods = mahadashas(J2000, 130.0);
        let parent = &periods[3];
        let children = subdivide(parent);
        assert!((children[0].start_jd - parent.start_jd).abs() < 1e-9);
        assert!((children[8].end_jd - parent.end_jd).abs() < 1e-12);
        for w in children.windows(2) {
            assert!((w[0].end_jd - w[1].start_jd).abs() < 1e-9);
        }
    }

    #[test]
    fn subdivide_proportions() {
        let periods = mahadashas(J2000, 0.0);
        let parent = &periods[0]; // Ketu, 7 years
        let children = subdivide(parent);
        // First child is Ketu-Ketu: 7/120 of the parent.
        let expected = parent.duration_days() * 7.0 / 120.0;
        assert!((children[0].duration_days() - expected).abs() < 1e-6);
    }

    #[test]
    fn pratyantara_is_deepest() {
        let periods = mahadashas(J2000, 0.0);
        let antara = subdivide(&periods[0]);
        let pratyantara = subdivide(&antara[0]);
        assert_eq!(pratyantara[0].level, DashaLevel::Pratyantara);
        assert!(subdivide(&pratyantara[0]).is_empty());
    }

    #[test]
    fn active_periods_nested() {
        let query = J2000 + 10_000.0;
        let (maha, antara, pratyantara) = active_periods(J2000, 100.0, query).unwrap();
        assert!(maha.contains(query));
        assert!(antara.contains(query));
        assert!(pratyantara.contains(query));
        assert!(antara.start_jd >= maha.start_jd && antara.end_jd <= maha.end_jd);
        assert!(pratyantara.start_jd >= antara.start_jd);
        assert_eq!(antara.parent, Some(maha.graha));
        assert_eq!(pratyantara.parent, Some(antara.graha));
    }

    #[test]
    fn query_outside_cycle_fails() {
        let too_late = J2000 + 121.0 * DAYS_PER_YEAR;
        assert_eq!(
            active_periods(J2000, 0.0, too_late),
            Err(BaseError::NoActivePeriod)
        );
        let too_early = J2000 - 10.0;
        assert_eq!(
            active_periods(J2000, 0.0, too_early),
            Err(BaseError::NoActivePeriod)
        );
    }
}
