//! Drishti (planetary aspect) geometry on whole-sign houses.
//!
//! Every graha aspects the 7th house from its own placement. Mangal,
//! Guru and Shani carry additional special aspects. Aspect offsets are
//! counted inclusively: the graha's own house is the 1st, so an offset
//! of 7 lands `((house + 7 - 2) mod 12) + 1`. No offset set contains 1,
//! so a graha never aspects its own house.

use crate::chart::PositionSet;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::util::wrap_house;

/// House reached by an inclusive aspect offset from a source house.
pub fn aspect_target(house: u8, offset: u8) -> u8 {
    wrap_house(house as i32 + offset as i32 - 1)
}

/// Aspect offsets per graha.
///
/// Defaults to the classical table: all grahas aspect the 7th; Mangal
/// adds 4 and 8, Guru adds 5 and 9, Shani adds 3 and 10. The table is a
/// value so alternate schools can swap offsets in without touching the
/// geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DrishtiTable {
    offsets: [Vec<u8>; 9],
}

impl Default for DrishtiTable {
    fn default() -> DrishtiTable {
        let mut offsets: [Vec<u8>; 9] = std::array::from_fn(|_| vec![7]);
        offsets[Graha::Mangal.index() as usize] = vec![4, 7, 8];
        offsets[Graha::Guru.index() as usize] = vec![5, 7, 9];
        offsets[Graha::Shani.index() as usize] = vec![3, 7, 10];
        DrishtiTable { offsets }
    }
}

impl DrishtiTable {
    /// Build a table from explicit per-graha offsets.
    pub fn new(offsets: [Vec<u8>; 9]) -> DrishtiTable {
        DrishtiTable { offsets }
    }

    /// Aspect offsets of a graha (inclusive counts, e.g. 7 for the 7th).
    pub fn offsets(&self, graha: Graha) -> &[u8] {
        &self.offsets[graha.index() as usize]
    }

    /// Houses aspected by a graha placed in `house`.
    pub fn aspected_houses(&self, graha: Graha, house: u8) -> Vec<u8> {
        self.offsets(graha)
            .iter()
            .map(|off| aspect_target(house, *off))
            .collect()
    }
}

/// One graha casting one aspect onto one house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRecord {
    /// The aspecting graha.
    pub graha: Graha,
    /// House the graha occupies.
    pub from_house: u8,
    /// Inclusive aspect offset (7 = the 7th aspect).
    pub offset: u8,
    /// House receiving the aspect.
    pub to_house: u8,
}

/// All single aspects cast by the grahas of a position set.
pub fn single_aspects(table: &DrishtiTable, positions: &PositionSet) -> Vec<AspectRecord> {
    let mut records = Vec::new();
    for graha in ALL_GRAHAS {
        let from_house = positions.graha(graha).house;
        for off in table.offsets(graha) {
            records.push(AspectRecord {
                graha,
                from_house,
                offset: *off,
                to_house: aspect_target(from_house, *off),
            });
        }
    }
    records
}

/// Kind of a body-to-body aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectKind {
    /// The source aspects the target's house.
    Single,
    /// Each body aspects the other's house.
    Mutual,
}

/// One graha aspecting another graha's house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyAspect {
    pub source: Graha,
    pub source_house: u8,
    pub target: Graha,
    pub target_house: u8,
    pub kind: AspectKind,
}

/// Body-to-body aspects between the grahas of a position set.
///
/// For every ordered pair of distinct grahas (A, B), a record is emitted
/// when B's house falls in A's aspected set; the record is marked mutual
/// when A's house also falls in B's set. A graha never aspects itself.
pub fn body_aspects(table: &DrishtiTable, positions: &PositionSet) -> Vec<BodyAspect> {
    let mut records = Vec::new();
    for source in ALL_GRAHAS {
        let source_house = positions.graha(source).house;
        let aspected = table.aspected_houses(source, source_house);
        for target in ALL_GRAHAS {
            if target == source {
                continue;
            }
            let target_house = positions.graha(target).house;
            if !aspected.contains(&target_house) {
                continue;
            }
            let reciprocal = table
                .aspected_houses(target, target_house)
                .contains(&source_house);
            records.push(BodyAspect {
                source,
                source_house,
                target,
                target_house,
                kind: if reciprocal {
                    AspectKind::Mutual
                } else {
                    AspectKind::Single
                },
            });
        }
    }
    records
}

/// A pair of grahas examined for combined aspect phenomena.
///
/// The classical pair is Guru and Shani, whose simultaneous aspects on a
/// house mark significant periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleAspectPair {
    pub first: Graha,
    pub second: Graha,
}

impl Default for DoubleAspectPair {
    fn default() -> DoubleAspectPair {
        DoubleAspectPair {
            first: Graha::Guru,
            second: Graha::Shani,
        }
    }
}

/// Combined aspect phenomena of a graha pair, all evaluated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleAspectReport {
    /// Houses aspected by both grahas at once.
    pub double_houses: Vec<u8>,
    /// Each graha's house falls in the other's aspect set.
    pub mutual: bool,
    /// Both grahas occupy the same house.
    pub conjunction: bool,
    /// Both grahas occupy the same rashi.
    pub same_rashi: bool,
}

impl DoubleAspectPair {
    /// Analyze the pair against a position set.
    pub fn analyze(&self, table: &DrishtiTable, positions: &PositionSet) -> DoubleAspectReport {
        let first_pos = positions.graha(self.first);
        let second_pos = positions.graha(self.second);

        let first_set = table.aspected_houses(self.first, first_pos.house);
        let second_set = table.aspected_houses(self.second, second_pos.house);

        let mut double_houses: Vec<u8> = first_set
            .iter()
            .copied()
            .filter(|h| second_set.contains(h))
            .collect();
        double_houses.sort_unstable();
        double_houses.dedup();

        DoubleAspectReport {
            double_houses,
            mutual: first_set.contains(&second_pos.house) && second_set.contains(&first_pos.house),
            conjunction: first_pos.house == second_pos.house,
            same_rashi: first_pos.rashi == second_pos.rashi,
        }
    }
}
