//! Analysis payload assembly.
//!
//! One call composes the full transit analysis for a (natal chart,
//! calendar date) pair: transit snapshot, house scores, ruler status,
//! aspects, per-graha detail, Sade Sati and the active dasha triple.
//! The payload is the serialization boundary; everything in it is plain
//! data with string names instead of enums.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use gochara_base::{
    AspectKind, Chart, DashaPeriod, DoubleAspectPair, DrishtiTable, Graha, PositionSet,
    active_periods, body_aspects, format_dms,
};

use crate::detail::graha_details;
use crate::ephemeris::Ephemeris;
use crate::error::EngineError;
use crate::julian::calendar_to_jd;
use crate::sade_sati::sade_sati;
use crate::score::{Banding, RulerAssessment, assess_ruler, house_ruler, house_sign, score_houses};
use crate::snapshot::transit_snapshot;

/// Payload metadata block.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMeta {
    pub engine: String,
    pub version: String,
    pub generated_at: String,
    pub query_date: String,
    pub ayanamsha: String,
}

/// One chart point's position, flattened for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct PositionDto {
    pub body: String,
    pub longitude: f64,
    pub degree: String,
    pub rashi: String,
    pub nakshatra: String,
    pub pada: u8,
    pub house: u8,
    pub retrograde: bool,
}

/// Natal chart block.
#[derive(Debug, Clone, Serialize)]
pub struct ChartDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub birth_jd: Option<f64>,
    pub positions: Vec<PositionDto>,
}

/// One house's score row.
#[derive(Debug, Clone, Serialize)]
pub struct HouseScoreDto {
    pub house: u8,
    pub sign: String,
    pub ruler: String,
    pub ruler_score: f64,
    pub residents_score: f64,
    pub aspects_score: f64,
    pub double_aspect_score: f64,
    pub total: f64,
    pub status: String,
    pub reasons: Vec<String>,
}

/// Transit condition of one house's ruler.
#[derive(Debug, Clone, Serialize)]
pub struct RulerStatusDto {
    pub house: u8,
    pub sign: String,
    pub ruler: String,
    pub transit_house: u8,
    pub transit_sign: String,
    pub retrograde: bool,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// One body-to-body aspect.
#[derive(Debug, Clone, Serialize)]
pub struct AspectDto {
    pub source: String,
    pub source_house: u8,
    pub target: String,
    pub target_house: u8,
    pub kind: String,
}

/// Double-aspect report for the configured pair.
#[derive(Debug, Clone, Serialize)]
pub struct DoubleAspectDto {
    pub first: String,
    pub second: String,
    pub double_houses: Vec<u8>,
    pub mutual: bool,
    pub conjunction: bool,
    pub same_rashi: bool,
}

/// One graha's transit detail row.
#[derive(Debug, Clone, Serialize)]
pub struct GrahaDetailDto {
    pub graha: String,
    pub house: u8,
    pub rashi: String,
    pub retrograde: bool,
    pub aspected_houses: Vec<u8>,
    pub placement: String,
}

/// Sade Sati block.
#[derive(Debug, Clone, Serialize)]
pub struct SadeSatiDto {
    pub active: bool,
    pub saturn_house: u8,
    pub moon_house: u8,
    pub distance: u8,
}

/// One dasha period.
#[derive(Debug, Clone, Serialize)]
pub struct DashaPeriodDto {
    pub level: String,
    pub graha: String,
    pub parent: Option<String>,
    pub start_jd: f64,
    pub end_jd: f64,
}

/// The active Maha/Antara/Pratyantara triple.
#[derive(Debug, Clone, Serialize)]
pub struct DashaDto {
    pub mahadasha: DashaPeriodDto,
    pub antara: DashaPeriodDto,
    pub pratyantara: DashaPeriodDto,
}

/// Complete analysis for one (chart, date) pair.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    pub meta: AnalysisMeta,
    pub natal: ChartDto,
    pub transit: Vec<PositionDto>,
    pub house_scores: Vec<HouseScoreDto>,
    pub ruler_status: Vec<RulerStatusDto>,
    pub aspects: Vec<AspectDto>,
    pub double_aspects: DoubleAspectDto,
    pub sade_sati: SadeSatiDto,
    pub graha_details: Vec<GrahaDetailDto>,
    /// `None` when the natal chart lacks birth time data.
    pub dasha: Option<DashaDto>,
}

fn position_dtos(positions: &PositionSet) -> Vec<PositionDto> {
    positions
        .iter()
        .map(|(point, pos)| PositionDto {
            body: point.name().to_string(),
            longitude: pos.longitude,
            degree: format_dms(pos.longitude),
            rashi: pos.rashi.name().to_string(),
            nakshatra: pos.nakshatra.name().to_string(),
            pada: pos.pada,
            house: pos.house,
            retrograde: pos.retrograde,
        })
        .collect()
}

fn dasha_period_dto(p: &DashaPeriod) -> DashaPeriodDto {
    DashaPeriodDto {
        level: p.level.name().to_string(),
        graha: p.graha.name().to_string(),
        parent: p.parent.map(|g| g.name().to_string()),
        start_jd: p.start_jd,
        end_jd: p.end_jd,
    }
}

/// Parse a strict `YYYY-MM-DD` date string into a UT-midnight Julian day.
pub fn parse_query_date(date: &str) -> Result<f64, EngineError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(date.to_string()))?;
    // chrono accepts unpadded month/day; require the canonical form.
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(EngineError::InvalidDate(date.to_string()));
    }
    Ok(calendar_to_jd(
        parsed.year(),
        parsed.month(),
        parsed.day() as f64,
    ))
}

/// Active dasha triple for a chart at a query instant.
///
/// Unlike [`analyze`], which degrades to `dasha: null`, this entry point
/// has nothing else to return, so a chart without a birth time is an
/// error.
pub fn chart_dasha(
    chart: &Chart,
    query_jd: f64,
) -> Result<(DashaPeriod, DashaPeriod, DashaPeriod), EngineError> {
    let birth_jd = chart.birth_jd.ok_or(EngineError::IncompleteNatalData)?;
    let moon_lon = chart.positions.graha(Graha::Chandra).longitude;
    Ok(active_periods(birth_jd, moon_lon, query_jd)?)
}

/// Run the full analysis for a natal chart on a calendar date.
///
/// The date string must be strict `YYYY-MM-DD`. Dasha resolution is
/// skipped (field left `None`) when the chart carries no birth time;
/// every other block still returns.
pub fn analyze<E: Ephemeris>(
    ephemeris: &E,
    chart: &Chart,
    date: &str,
) -> Result<AnalysisPayload, EngineError> {
    let query_jd = parse_query_date(date)?;
    let table = DrishtiTable::default();
    let pair = DoubleAspectPair::default();

    let transit = transit_snapshot(ephemeris, query_jd, chart)?;
    let lagna_rashi = chart.lagna_rashi();

    let house_scores = score_houses(lagna_rashi, &transit, &table, pair, Banding::Wide)
        .into_iter()
        .map(|s| HouseScoreDto {
            house: s.house,
            sign: s.sign.name().to_string(),
            ruler: s.ruler.name().to_string(),
            ruler_score: s.ruler_score,
            residents_score: s.residents_score,
            aspects_score: s.aspects_score,
            double_aspect_score: s.double_aspect_score,
            total: s.total,
            status: s.band.name().to_string(),
            reasons: s.reasons,
        })
        .collect();

    let ruler_status = (1..=12u8)
        .map(|house| {
            let ruler = house_ruler(lagna_rashi, house);
            let a: RulerAssessment = assess_ruler(ruler, &transit, &table);
            RulerStatusDto {
                house,
                sign: house_sign(lagna_rashi, house).name().to_string(),
                ruler: ruler.name().to_string(),
                transit_house: a.transit_house,
                transit_sign: a.transit_rashi.name().to_string(),
                retrograde: a.retrograde,
                score: a.score,
                reasons: a.reasons,
            }
        })
        .collect();

    let aspects = body_aspects(&table, &transit)
        .into_iter()
        .map(|r| AspectDto {
            source: r.source.name().to_string(),
            source_house: r.source_house,
            target: r.target.name().to_string(),
            target_house: r.target_house,
            kind: match r.kind {
                AspectKind::Single => "single".to_string(),
                AspectKind::Mutual => "mutual".to_string(),
            },
        })
        .collect();

    let double_report = pair.analyze(&table, &transit);
    let double_aspects = DoubleAspectDto {
        first: pair.first.name().to_string(),
        second: pair.second.name().to_string(),
        double_houses: double_report.double_houses,
        mutual: double_report.mutual,
        conjunction: double_report.conjunction,
        same_rashi: double_report.same_rashi,
    };

    let sati = sade_sati(&chart.positions, &transit);

    let details = graha_details(&transit, &table)
        .into_iter()
        .map(|d| GrahaDetailDto {
            graha: d.graha.name().to_string(),
            house: d.house,
            rashi: d.rashi.name().to_string(),
            retrograde: d.retrograde,
            aspected_houses: d.aspected_houses,
            placement: d.placement.name().to_string(),
        })
        .collect();

    let dasha = match chart.birth_jd {
        Some(birth_jd) => {
            let moon_lon = chart.positions.graha(Graha::Chandra).longitude;
            let (maha, antara, pratyantara) = active_periods(birth_jd, moon_lon, query_jd)?;
            Some(DashaDto {
                mahadasha: dasha_period_dto(&maha),
                antara: dasha_period_dto(&antara),
                pratyantara: dasha_period_dto(&pratyantara),
            })
        }
        None => {
            debug!(chart = %chart.name, "no birth time; skipping dasha resolution");
            None
        }
    };

    Ok(AnalysisPayload {
        meta: AnalysisMeta {
            engine: "gochara".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            query_date: date.to_string(),
            ayanamsha: "Lahiri".to_string(),
        },
        natal: ChartDto {
            name: chart.name.clone(),
            latitude: chart.latitude,
            longitude: chart.longitude,
            birth_jd: chart.birth_jd,
            positions: position_dtos(&chart.positions),
        },
        transit: position_dtos(&transit),
        house_scores,
        ruler_status,
        aspects,
        double_aspects,
        sade_sati: SadeSatiDto {
            active: sati.active,
            saturn_house: sati.saturn_house,
            moon_house: sati.moon_house,
            distance: sati.distance,
        },
        graha_details: details,
        dasha,
    })
}
