//! Sade Sati condition check.
//!
//! Sade Sati is active while transiting Shani stands within one house
//! (cyclically) of the natal Chandra: the 12th, 1st or 2nd house from
//! the Moon.

use gochara_base::{Graha, PositionSet, house_distance};

/// Result of the Sade Sati check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SadeSatiReport {
    /// Whether the condition is active.
    pub active: bool,
    /// Transiting Shani's house (from the natal lagna).
    pub saturn_house: u8,
    /// Natal Chandra's house.
    pub moon_house: u8,
    /// Cyclic house distance between the two.
    pub distance: u8,
}

/// Evaluate Sade Sati from natal and transit positions.
pub fn sade_sati(natal: &PositionSet, transit: &PositionSet) -> SadeSatiReport {
    let saturn_house = transit.graha(Graha::Shani).house;
    let moon_house = natal.graha(Graha::Chandra).house;
    let distance = house_distance(saturn_house, moon_house);
    SadeSatiReport {
        active: distance <= 1,
        saturn_house,
        moon_house,
        distance,
    }
}
