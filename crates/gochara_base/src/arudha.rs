//! Arudha padas.
//!
//! The arudha of a house is the house as far from the house's ruler as
//! the ruler stands from the house, counting forward. When that count
//! lands on the house itself or on the 7th from it, the 10th from the
//! house is taken instead. The arudha point inherits the ruler's
//! advancement within its rashi.

use crate::chart::PositionSet;
use crate::graha::rashi_lord;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{ALL_RASHIS, Rashi};
use crate::util::wrap_house;

/// One arudha entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ArudhaPada {
    /// House the arudha belongs to, 1-12.
    pub house: u8,
    /// `AL` for house 1, `A2`..`A12`, `UL` for the upapada row.
    pub label: String,
    /// House the arudha falls in, 1-12.
    pub arudha_house: u8,
    /// Rashi of the arudha point.
    pub rashi: Rashi,
    /// Absolute sidereal longitude of the arudha point.
    pub longitude: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

fn arudha_for_house(
    house: u8,
    lagna_rashi: Rashi,
    positions: &PositionSet,
    label: String,
) -> ArudhaPada {
    let house_sign = ALL_RASHIS[(lagna_rashi.index() as usize + house as usize - 1) % 12];
    let ruler = positions.graha(rashi_lord(house_sign));

    let distance = (i32::from(ruler.house) - i32::from(house)).rem_euclid(12);
    let mut arudha_house = wrap_house(i32::from(ruler.house) + distance);
    if arudha_house == house || arudha_house == wrap_house(i32::from(house) + 6) {
        arudha_house = wrap_house(i32::from(house) + 10);
    }

    let sign_index = (lagna_rashi.index() as usize + arudha_house as usize - 1) % 12;
    let longitude = sign_index as f64 * 30.0 + ruler.longitude.rem_euclid(30.0);
    let info = nakshatra_from_longitude(longitude);

    ArudhaPada {
        house,
        label,
        arudha_house,
        rashi: ALL_RASHIS[sign_index],
        longitude,
        nakshatra: info.nakshatra,
        pada: info.pada,
    }
}

/// Arudha table for all 12 houses plus the upapada.
///
/// Thirteen rows: `AL`, `A2`..`A12`, then `UL` (the 12th house arudha
/// repeated under its upapada label).
pub fn arudha_padas(lagna_rashi: Rashi, positions: &PositionSet) -> Vec<ArudhaPada> {
    let mut table: Vec<ArudhaPada> = (1..=12u8)
        .map(|house| {
            let label = if house == 1 {
                "AL".to_string()
            } else {
                format!("A{house}")
            };
            arudha_for_house(house, lagna_rashi, positions, label)
        })
        .collect();
    table.push(arudha_for_house(12, lagna_rashi, positions, "UL".to_string()));
    table
}
