//! Per-graha transit detail.
//!
//! A flat table of every graha's current placement: house, sign, motion,
//! the houses it aspects, and the quality of its house placement.

use gochara_base::{
    ALL_GRAHAS, BodyNature, DrishtiTable, Graha, HouseCategory, PositionSet, Rashi,
    house_category, natural_nature,
};

/// Placement quality of a graha in its transit house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementQuality {
    Strong,
    Weak,
    Mixed,
}

impl PlacementQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Mixed => "Mixed",
        }
    }
}

/// Quality of a graha's house placement, the same classification the
/// residents component scores with: a malefic in a dusthana is weak and
/// anything else there is strong; trikonas and kendras favor benefics
/// only; the remaining houses are mixed.
fn placement_quality(graha: Graha, house: u8) -> PlacementQuality {
    let nature = natural_nature(graha);
    match house_category(house) {
        HouseCategory::Dusthana => match nature {
            BodyNature::Malefic => PlacementQuality::Weak,
            BodyNature::Benefic | BodyNature::Neutral => PlacementQuality::Strong,
        },
        HouseCategory::Trikona | HouseCategory::Kendra => match nature {
            BodyNature::Benefic => PlacementQuality::Strong,
            BodyNature::Malefic | BodyNature::Neutral => PlacementQuality::Weak,
        },
        HouseCategory::Other => PlacementQuality::Mixed,
    }
}

/// One graha's transit detail row.
#[derive(Debug, Clone, PartialEq)]
pub struct GrahaDetail {
    pub graha: Graha,
    pub house: u8,
    pub rashi: Rashi,
    pub retrograde: bool,
    /// Houses this graha aspects from its current house.
    pub aspected_houses: Vec<u8>,
    pub placement: PlacementQuality,
}

/// Detail rows for all 9 grahas of a transit snapshot.
pub fn graha_details(transit: &PositionSet, table: &DrishtiTable) -> Vec<GrahaDetail> {
    ALL_GRAHAS
        .iter()
        .map(|graha| {
            let pos = transit.graha(*graha);
            GrahaDetail {
                graha: *graha,
                house: pos.house,
                rashi: pos.rashi,
                retrograde: pos.retrograde,
                aspected_houses: table.aspected_houses(*graha, pos.house),
                placement: placement_quality(*graha, pos.house),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gochara_base::Position;

    #[test]
    fn quality_by_nature_and_category() {
        assert_eq!(placement_quality(Graha::Shani, 8), PlacementQuality::Weak);
        assert_eq!(placement_quality(Graha::Guru, 8), PlacementQuality::Strong);
        assert_eq!(placement_quality(Graha::Rahu, 12), PlacementQuality::Strong);
        assert_eq!(placement_quality(Graha::Guru, 9), PlacementQuality::Strong);
        assert_eq!(placement_quality(Graha::Mangal, 10), PlacementQuality::Weak);
        assert_eq!(placement_quality(Graha::Ketu, 5), PlacementQuality::Weak);
        assert_eq!(placement_quality(Graha::Shukra, 11), PlacementQuality::Mixed);
    }

    #[test]
    fn quality_agrees_with_resident_weight_sign() {
        for graha in ALL_GRAHAS {
            for house in 1..=12u8 {
                let expected = match crate::score::resident_weight(house, graha) {
                    w if w > 0.0 => PlacementQuality::Strong,
                    w if w < 0.0 => PlacementQuality::Weak,
                    _ => PlacementQuality::Mixed,
                };
                assert_eq!(
                    placement_quality(graha, house),
                    expected,
                    "{} in house {house}",
                    graha.name()
                );
            }
        }
    }

    #[test]
    fn details_cover_all_grahas() {
        let positions = [Position::from_longitude(100.0, 100.0, false); 10];
        let set = PositionSet::new(positions);
        let table = DrishtiTable::default();
        let details = graha_details(&set, &table);
        assert_eq!(details.len(), 9);
        for d in &details {
            assert_eq!(d.house, 1);
            assert!(!d.aspected_houses.is_empty());
        }
    }
}
