//! Transit snapshot construction.
//!
//! A snapshot carries the positions of all 10 chart points at a query
//! time, with houses anchored to the NATAL lagna (whole-sign transit
//! convention). The lagna entry is copied from the natal chart, never
//! recomputed: the natal ascendant defines house 1 for every transit.

use gochara_base::{Chart, Graha, Position, PositionSet, SAPTA_GRAHAS, normalize_360};

use crate::ephemeris::{Ephemeris, EphemerisError};

/// Build the transit position set for a query instant.
///
/// The 7 classical grahas and Rahu are queried from the provider; Ketu
/// is derived as Rahu + 180 deg sharing Rahu's motion flag.
pub fn transit_snapshot<E: Ephemeris>(
    ephemeris: &E,
    jd_ut: f64,
    natal: &Chart,
) -> Result<PositionSet, EphemerisError> {
    let lagna_lon = natal.lagna_longitude();
    let mut positions = [*natal.positions.lagna(); 10];

    for graha in SAPTA_GRAHAS {
        let state = ephemeris.body_state(jd_ut, graha)?;
        positions[graha.index() as usize] =
            Position::from_longitude(state.longitude, lagna_lon, state.retrograde());
    }

    let rahu = ephemeris.body_state(jd_ut, Graha::Rahu)?;
    positions[Graha::Rahu.index() as usize] =
        Position::from_longitude(rahu.longitude, lagna_lon, rahu.retrograde());
    positions[Graha::Ketu.index() as usize] = Position::from_longitude(
        normalize_360(rahu.longitude + 180.0),
        lagna_lon,
        rahu.retrograde(),
    );

    Ok(PositionSet::new(positions))
}
