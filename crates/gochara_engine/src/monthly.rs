//! Monthly transit summary.
//!
//! Scores every day of a calendar month with narrow banding, averages
//! each house over the days it actually scored (non-zero totals only),
//! and collects the "key dates" where any house reached a strongly
//! favorable total.

use chrono::NaiveDate;

use gochara_base::{Chart, DoubleAspectPair, DrishtiTable};

use crate::ephemeris::Ephemeris;
use crate::error::EngineError;
use crate::julian::calendar_to_jd;
use crate::score::{Band, Banding, band_for, score_houses};
use crate::snapshot::transit_snapshot;

/// Threshold a single house total must reach for its day to be a key date.
const KEY_DATE_THRESHOLD: f64 = 2.0;

/// One house's month-level summary.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseMonthly {
    /// House number, 1-12.
    pub house: u8,
    /// Mean total over days with a non-zero score (0 when none).
    pub average: f64,
    /// Narrow band of the average.
    pub band: Band,
}

/// Month-level transit summary for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub houses: Vec<HouseMonthly>,
    /// `YYYY-MM-DD` dates where any house total reached the key threshold.
    pub key_dates: Vec<String>,
}

/// Score every day of a month and summarize per house.
pub fn monthly_analysis<E: Ephemeris>(
    ephemeris: &E,
    chart: &Chart,
    year: i32,
    month: u32,
) -> Result<MonthlySummary, EngineError> {
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(EngineError::InvalidDate(format!("{year}-{month:02}")));
    }

    let table = DrishtiTable::default();
    let pair = DoubleAspectPair::default();
    let lagna_rashi = chart.lagna_rashi();

    let mut sums = [0.0f64; 12];
    let mut counts = [0u32; 12];
    let mut key_dates = Vec::new();

    for day in 1..=31u32 {
        let date = match NaiveDate::from_ymd_opt(year, month, day) {
            Some(d) => d,
            None => break,
        };
        let jd = calendar_to_jd(year, month, day as f64);
        let transit = transit_snapshot(ephemeris, jd, chart)?;
        let scores = score_houses(lagna_rashi, &transit, &table, pair, Banding::Narrow);

        let mut is_key = false;
        for s in &scores {
            let idx = (s.house - 1) as usize;
            if s.total != 0.0 {
                sums[idx] += s.total;
                counts[idx] += 1;
            }
            if s.total >= KEY_DATE_THRESHOLD {
                is_key = true;
            }
        }
        if is_key {
            key_dates.push(date.format("%Y-%m-%d").to_string());
        }
    }

    let houses = (0..12)
        .map(|idx| {
            let average = if counts[idx] > 0 {
                sums[idx] / counts[idx] as f64
            } else {
                0.0
            };
            HouseMonthly {
                house: (idx + 1) as u8,
                average,
                band: band_for(average, Banding::Narrow),
            }
        })
        .collect();

    Ok(MonthlySummary {
        year,
        month,
        houses,
        key_dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{BodyState, EphemerisError};
    use gochara_base::{Graha, Position, PositionSet};

    /// Bodies crawl forward a little each day so scores vary.
    struct DriftEphemeris;

    impl Ephemeris for DriftEphemeris {
        fn body_state(&self, jd_ut: f64, graha: Graha) -> Result<BodyState, EphemerisError> {
            let base = graha.index() as f64 * 37.0;
            let drift = (jd_ut - 2_460_000.5) * 1.2;
            Ok(BodyState {
                longitude: base + drift,
                speed: 1.0,
            })
        }
    }

    fn chart() -> Chart {
        let positions = [Position::from_longitude(100.0, 100.0, false); 10];
        Chart {
            name: "monthly".to_string(),
            latitude: 19.0,
            longitude: 72.8,
            birth_jd: Some(2_451_545.0),
            positions: PositionSet::new(positions),
        }
    }

    #[test]
    fn month_summary_has_12_houses() {
        let summary = monthly_analysis(&DriftEphemeris, &chart(), 2024, 2).unwrap();
        assert_eq!(summary.houses.len(), 12);
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.month, 2);
        for h in &summary.houses {
            assert_eq!(h.band, band_for(h.average, Banding::Narrow));
        }
    }

    #[test]
    fn invalid_month_rejected() {
        assert!(matches!(
            monthly_analysis(&DriftEphemeris, &chart(), 2024, 13),
            Err(EngineError::InvalidDate(_))
        ));
    }

    #[test]
    fn key_dates_are_canonical_strings() {
        let summary = monthly_analysis(&DriftEphemeris, &chart(), 2024, 1).unwrap();
        for d in &summary.key_dates {
            assert_eq!(d.len(), 10);
            assert!(d.starts_with("2024-01-"));
        }
    }
}
