//! Jaimini chara karakas.
//!
//! The seven classical grahas are ranked by how far each has advanced
//! into its rashi, most advanced first, and each rank carries one
//! karaka. Rahu and Ketu take no karaka.

use crate::chart::PositionSet;
use crate::graha::{Graha, SAPTA_GRAHAS};

/// The seven chara karakas in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karaka {
    Atma,
    Amatya,
    Bhratri,
    Matri,
    Putra,
    Gnati,
    Dara,
}

/// All karakas in assignment order (most advanced graha first).
pub const ALL_KARAKAS: [Karaka; 7] = [
    Karaka::Atma,
    Karaka::Amatya,
    Karaka::Bhratri,
    Karaka::Matri,
    Karaka::Putra,
    Karaka::Gnati,
    Karaka::Dara,
];

impl Karaka {
    /// Full name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atma => "Atmakaraka",
            Self::Amatya => "Amatyakaraka",
            Self::Bhratri => "Bhratrikaraka",
            Self::Matri => "Matrikaraka",
            Self::Putra => "Putrakaraka",
            Self::Gnati => "Gnatikaraka",
            Self::Dara => "Darakaraka",
        }
    }

    /// Conventional abbreviation (e.g. `AK`).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Atma => "AK",
            Self::Amatya => "AmK",
            Self::Bhratri => "BK",
            Self::Matri => "MK",
            Self::Putra => "PK",
            Self::Gnati => "GK",
            Self::Dara => "DK",
        }
    }
}

/// Assign the chara karakas from a chart's positions.
///
/// Grahas are ordered by degrees within their rashi, descending; ties
/// keep the natural graha order. Returns all 7 assignments in karaka
/// order, Atmakaraka first.
pub fn chara_karakas(positions: &PositionSet) -> [(Graha, Karaka); 7] {
    let mut ranked: [(Graha, f64); 7] = [(Graha::Surya, 0.0); 7];
    for (slot, graha) in ranked.iter_mut().zip(SAPTA_GRAHAS) {
        *slot = (graha, positions.graha(graha).longitude.rem_euclid(30.0));
    }
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut out = [(Graha::Surya, Karaka::Atma); 7];
    for (i, (graha, _)) in ranked.iter().enumerate() {
        out[i] = (*graha, ALL_KARAKAS[i]);
    }
    out
}
