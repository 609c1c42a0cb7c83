//! Chart record schema and conversion to the in-memory chart model.
//!
//! Records carry positions as `D°M'S''` degree tokens. Conversion to a
//! [`Chart`] is lenient: a malformed token or a missing body degrades to
//! 0 degrees with a warning, so one bad record never poisons the list.

use serde::{Deserialize, Serialize};
use tracing::warn;

use gochara_base::{
    ALL_GRAHAS, Chart, ChartPoint, Position, PositionSet, format_dms, parse_dms,
};

/// One body's stored position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    /// Sanskrit body name (e.g. `Shani`).
    pub body: String,
    /// Sidereal longitude as a `D°M'S''` token.
    pub degree: String,
    #[serde(default)]
    pub retrograde: bool,
}

/// One stored natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub name: String,
    /// Birth date, `YYYY-MM-DD`.
    pub date: String,
    /// Birth local time, `HH:MM`.
    pub time: String,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
    /// Birth instant as Julian day (UT); absent for undated charts.
    pub julian_day: Option<f64>,
    /// Lagna longitude as a `D°M'S''` token.
    pub lagna: String,
    pub bodies: Vec<BodyRecord>,
}

/// Parse a degree token leniently: malformed input becomes 0 degrees.
fn lenient_degree(token: &str, context: &str) -> f64 {
    match parse_dms(token) {
        Ok(deg) => deg,
        Err(_) => {
            warn!(token, context, "malformed degree token; substituting 0");
            0.0
        }
    }
}

impl ChartRecord {
    /// Build the in-memory chart from this record.
    pub fn to_chart(&self) -> Chart {
        let lagna_lon = lenient_degree(&self.lagna, "lagna");

        let mut positions = [Position::from_longitude(lagna_lon, lagna_lon, false); 10];
        for graha in ALL_GRAHAS {
            let found = self.bodies.iter().find(|b| b.body == graha.name());
            let (lon, retro) = match found {
                Some(rec) => (lenient_degree(&rec.degree, graha.name()), rec.retrograde),
                None => {
                    warn!(body = graha.name(), chart = %self.name, "body missing from record");
                    (0.0, false)
                }
            };
            positions[graha.index() as usize] = Position::from_longitude(lon, lagna_lon, retro);
        }

        Chart {
            name: self.name.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            birth_jd: self.julian_day,
            positions: PositionSet::new(positions),
        }
    }

    /// Build a record from a chart plus the birth metadata the chart
    /// itself does not carry.
    pub fn from_chart(
        chart: &Chart,
        date: &str,
        time: &str,
        place: &str,
        utc_offset_hours: f64,
    ) -> ChartRecord {
        let bodies = ALL_GRAHAS
            .iter()
            .map(|g| {
                let pos = chart.positions.graha(*g);
                BodyRecord {
                    body: g.name().to_string(),
                    degree: format_dms(pos.longitude),
                    retrograde: pos.retrograde,
                }
            })
            .collect();

        ChartRecord {
            name: chart.name.clone(),
            date: date.to_string(),
            time: time.to_string(),
            place: place.to_string(),
            latitude: chart.latitude,
            longitude: chart.longitude,
            utc_offset_hours,
            julian_day: chart.birth_jd,
            lagna: format_dms(chart.positions.position(ChartPoint::Lagna).longitude),
            bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gochara_base::Graha;

    fn sample_record() -> ChartRecord {
        ChartRecord {
            name: "Sample".to_string(),
            date: "1990-04-02".to_string(),
            time: "06:45".to_string(),
            place: "Delhi".to_string(),
            latitude: 28.61,
            longitude: 77.21,
            utc_offset_hours: 5.5,
            julian_day: Some(2_448_000.5),
            lagna: "95°30'0''".to_string(),
            bodies: ALL_GRAHAS
                .iter()
                .map(|g| BodyRecord {
                    body: g.name().to_string(),
                    degree: format_dms(g.index() as f64 * 40.0 + 5.0),
                    retrograde: *g == Graha::Shani,
                })
                .collect(),
        }
    }

    #[test]
    fn record_to_chart() {
        let chart = sample_record().to_chart();
        assert_eq!(chart.name, "Sample");
        assert_eq!(chart.birth_jd, Some(2_448_000.5));
        assert!((chart.lagna_longitude() - 95.5).abs() < 1e-3);
        assert!(chart.positions.graha(Graha::Shani).retrograde);
        // Surya at 5 deg: Mesha, house 10 from a Karka lagna.
        assert_eq!(chart.positions.graha(Graha::Surya).house, 10);
    }

    #[test]
    fn malformed_degree_degrades_to_zero() {
        let mut record = sample_record();
        record.bodies[0].degree = "garbage".to_string();
        let chart = record.to_chart();
        assert!((chart.positions.graha(Graha::Surya).longitude).abs() < 1e-10);
    }

    #[test]
    fn missing_body_degrades_to_zero() {
        let mut record = sample_record();
        record.bodies.retain(|b| b.body != "Guru");
        let chart = record.to_chart();
        assert!((chart.positions.graha(Graha::Guru).longitude).abs() < 1e-10);
        assert!(!chart.positions.graha(Graha::Guru).retrograde);
    }

    #[test]
    fn chart_record_round_trip() {
        let record = sample_record();
        let chart = record.to_chart();
        let back = ChartRecord::from_chart(&chart, &record.date, &record.time, &record.place, 5.5);
        assert_eq!(back.name, record.name);
        assert_eq!(back.bodies.len(), 9);
        for (a, b) in back.bodies.iter().zip(record.bodies.iter()) {
            assert_eq!(a.body, b.body);
            assert_eq!(a.retrograde, b.retrograde);
        }
    }

    #[test]
    fn record_serde_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ChartRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
