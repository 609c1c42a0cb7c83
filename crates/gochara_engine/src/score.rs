//! Per-house favorability scoring over a transit snapshot.
//!
//! Each house's total is the sum of exactly four components: the
//! condition of the house's ruler in transit, the bodies resident in
//! the house, single aspects cast onto the house, and double-aspect
//! involvement (recorded but carrying no numeric weight). Band labels
//! come in two granularities: wide thresholds for the single-date
//! payload status and narrow ones for daily/monthly reporting.

use gochara_base::{
    ALL_GRAHAS, BodyNature, DoubleAspectPair, DoubleAspectReport, DrishtiTable, Graha,
    HouseCategory, Maitri, PositionSet, Rashi, rashi_lord, house_category, natural_nature,
    sign_affinity, single_aspects, wrap_house,
};

/// Five ordered favorability bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    CriticallyUnfavorable,
    Unfavorable,
    Neutral,
    Favorable,
    VeryFavorable,
}

impl Band {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CriticallyUnfavorable => "Critically Unfavorable",
            Self::Unfavorable => "Unfavorable",
            Self::Neutral => "Neutral",
            Self::Favorable => "Favorable",
            Self::VeryFavorable => "Very Favorable",
        }
    }
}

/// Threshold granularity for band mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banding {
    /// Outer thresholds at ±3 (single-date payload status).
    Wide,
    /// Outer thresholds at ±2 (daily and monthly reporting).
    Narrow,
}

/// Map a total score to its band.
pub fn band_for(total: f64, banding: Banding) -> Band {
    let outer = match banding {
        Banding::Wide => 3.0,
        Banding::Narrow => 2.0,
    };
    if total >= outer {
        Band::VeryFavorable
    } else if total >= 1.0 {
        Band::Favorable
    } else if total > -1.0 {
        Band::Neutral
    } else if total > -outer {
        Band::Unfavorable
    } else {
        Band::CriticallyUnfavorable
    }
}

/// Rashi occupying a house for a given lagna rashi (whole-sign).
pub fn house_sign(lagna_rashi: Rashi, house: u8) -> Rashi {
    let idx = wrap_house(lagna_rashi.index() as i32 + house as i32) as usize;
    // wrap_house is 1-based; shift back to a 0-based rashi index.
    gochara_base::ALL_RASHIS[idx - 1]
}

/// Ruler of a house for a given lagna rashi.
pub fn house_ruler(lagna_rashi: Rashi, house: u8) -> Graha {
    rashi_lord(house_sign(lagna_rashi, house))
}

/// Transit condition of one house ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerAssessment {
    /// The ruling graha.
    pub graha: Graha,
    /// House the ruler occupies in transit.
    pub transit_house: u8,
    /// Rashi the ruler occupies in transit.
    pub transit_rashi: Rashi,
    /// Whether the ruler is retrograde in transit.
    pub retrograde: bool,
    /// Summed ruler score.
    pub score: f64,
    /// Human-readable component justifications.
    pub reasons: Vec<String>,
}

/// Evaluate a house ruler against the transit snapshot.
///
/// Four independent sub-scores: the ruler's own house category, its sign
/// affinity (maitri toward the transit sign's lord), its motion, and
/// conjunctions or aspects from every other benefic/malefic graha onto
/// the ruler's house. Nodes contribute nothing to the fourth term.
pub fn assess_ruler(ruler: Graha, transit: &PositionSet, table: &DrishtiTable) -> RulerAssessment {
    let pos = transit.graha(ruler);
    let mut score = 0.0;
    let mut reasons = Vec::new();

    match house_category(pos.house) {
        HouseCategory::Dusthana => {
            score -= 1.0;
            reasons.push(format!("{} transits dusthana house {}", ruler.name(), pos.house));
        }
        HouseCategory::Trikona => {
            score += 1.0;
            reasons.push(format!("{} transits trikona house {}", ruler.name(), pos.house));
        }
        HouseCategory::Kendra | HouseCategory::Other => {
            score += 0.5;
            reasons.push(format!("{} transits house {}", ruler.name(), pos.house));
        }
    }

    match sign_affinity(ruler, pos.rashi) {
        Maitri::Friend => {
            score += 1.0;
            reasons.push(format!("{} in friendly sign {}", ruler.name(), pos.rashi.name()));
        }
        Maitri::Enemy => {
            score -= 1.0;
            reasons.push(format!("{} in inimical sign {}", ruler.name(), pos.rashi.name()));
        }
        Maitri::Neutral => {}
    }

    if pos.retrograde {
        score -= 1.0;
        reasons.push(format!("{} is retrograde", ruler.name()));
    } else {
        score += 1.0;
        reasons.push(format!("{} is in direct motion", ruler.name()));
    }

    for other in ALL_GRAHAS {
        if other == ruler {
            continue;
        }
        let weight = match natural_nature(other) {
            BodyNature::Benefic => 1.0,
            BodyNature::Malefic => -1.0,
            BodyNature::Neutral => continue,
        };
        let other_pos = transit.graha(other);
        if other_pos.house == pos.house {
            score += weight;
            reasons.push(format!("{} conjunct {}", other.name(), ruler.name()));
        } else if table
            .aspected_houses(other, other_pos.house)
            .contains(&pos.house)
        {
            score += weight;
            reasons.push(format!("{} aspects {}'s house", other.name(), ruler.name()));
        }
    }

    RulerAssessment {
        graha: ruler,
        transit_house: pos.house,
        transit_rashi: pos.rashi,
        retrograde: pos.retrograde,
        score,
        reasons,
    }
}

/// Resident contribution of one graha standing in a house.
///
/// Dusthana houses reward everything except malefics; trikona and
/// kendra houses reward only benefics; the remaining houses are flat.
pub(crate) fn resident_weight(house: u8, graha: Graha) -> f64 {
    let nature = natural_nature(graha);
    match house_category(house) {
        HouseCategory::Dusthana => {
            if nature == BodyNature::Malefic {
                -1.0
            } else {
                1.0
            }
        }
        HouseCategory::Trikona | HouseCategory::Kendra => {
            if nature == BodyNature::Benefic {
                1.0
            } else {
                -1.0
            }
        }
        HouseCategory::Other => 0.0,
    }
}

/// Score and label of one house.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseScore {
    /// House number, 1-12.
    pub house: u8,
    /// Rashi occupying the house.
    pub sign: Rashi,
    /// Ruler of that rashi.
    pub ruler: Graha,
    /// Ruler component.
    pub ruler_score: f64,
    /// Residents component.
    pub residents_score: f64,
    /// Single-aspect component.
    pub aspects_score: f64,
    /// Double-aspect component (always 0; recorded in reasons).
    pub double_aspect_score: f64,
    /// Sum of the four components.
    pub total: f64,
    /// Band label for the total.
    pub band: Band,
    /// Ordered component justifications.
    pub reasons: Vec<String>,
}

/// Score all 12 houses of a transit snapshot.
///
/// Houses and rulers are taken from the natal lagna rashi; every
/// component is evaluated on transit positions.
pub fn score_houses(
    lagna_rashi: Rashi,
    transit: &PositionSet,
    table: &DrishtiTable,
    pair: DoubleAspectPair,
    banding: Banding,
) -> Vec<HouseScore> {
    let aspects = single_aspects(table, transit);
    let double_report: DoubleAspectReport = pair.analyze(table, transit);

    let mut scores = Vec::with_capacity(12);
    for house in 1..=12u8 {
        let sign = house_sign(lagna_rashi, house);
        let ruler = house_ruler(lagna_rashi, house);
        let mut reasons = Vec::new();

        let assessment = assess_ruler(ruler, transit, table);
        let ruler_score = assessment.score;
        reasons.extend(assessment.reasons);

        let mut residents_score = 0.0;
        for graha in ALL_GRAHAS {
            if transit.graha(graha).house == house {
                let w = resident_weight(house, graha);
                residents_score += w;
                if w != 0.0 {
                    reasons.push(format!(
                        "{} resident in house {} ({:+})",
                        graha.name(),
                        house,
                        w as i32
                    ));
                }
            }
        }

        let mut aspects_score = 0.0;
        for record in &aspects {
            if record.to_house != house || record.graha == ruler {
                continue;
            }
            let w = match natural_nature(record.graha) {
                BodyNature::Benefic => 1.0,
                BodyNature::Malefic => -1.0,
                BodyNature::Neutral => 0.0,
            };
            aspects_score += w;
            if w != 0.0 {
                reasons.push(format!(
                    "{} aspects house {} ({:+})",
                    record.graha.name(),
                    house,
                    w as i32
                ));
            }
        }

        let double_aspect_score = 0.0;
        if double_report.double_houses.contains(&house) {
            reasons.push(format!(
                "{} and {} jointly aspect house {}",
                pair.first.name(),
                pair.second.name(),
                house
            ));
        }

        let total = ruler_score + residents_score + aspects_score + double_aspect_score;
        scores.push(HouseScore {
            house,
            sign,
            ruler,
            ruler_score,
            residents_score,
            aspects_score,
            double_aspect_score,
            total,
            band: band_for(total, banding),
            reasons,
        });
    }
    scores
}
