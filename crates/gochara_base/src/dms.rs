//! Degree string handling in the `D°M'S''` token form.
//!
//! Chart records and report tables carry longitudes as degree-minute-second
//! tokens (e.g. `18°58'5''`). Parsing is strict: a missing delimiter or a
//! non-numeric part is an error, and the caller decides whether to
//! propagate or substitute a fallback value.

use crate::error::BaseError;

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Format decimal degrees as a `D°M'S''` token with whole arc-seconds.
///
/// `parse_dms(format_dms(x))` recovers `x` within one arc-second.
pub fn format_dms(deg: f64) -> String {
    let dms = deg_to_dms(deg);
    format!("{}°{}'{}''", dms.degrees, dms.minutes, dms.seconds.floor() as u8)
}

/// Parse a `D°M'S''` token into decimal degrees.
///
/// The trailing `''` is optional; all three numeric parts are required.
pub fn parse_dms(token: &str) -> Result<f64, BaseError> {
    let malformed = || BaseError::MalformedDegree(token.to_string());

    let cleaned = token.trim().trim_end_matches("''");
    let (deg_part, rest) = cleaned.split_once('°').ok_or_else(malformed)?;
    let (min_part, sec_part) = rest.split_once('\'').ok_or_else(malformed)?;

    let degrees: f64 = deg_part.trim().parse().map_err(|_| malformed())?;
    let minutes: f64 = min_part.trim().parse().map_err(|_| malformed())?;
    let seconds: f64 = sec_part.trim().parse().map_err(|_| malformed())?;

    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn dms_round_trip() {
        let d = deg_to_dms(123.456789);
        assert!((dms_to_deg(&d) - 123.456789).abs() < 1e-10);
    }

    #[test]
    fn parse_known_token() {
        // 18°58'5'' = 18 + 58/60 + 5/3600
        let expected = 18.0 + 58.0 / 60.0 + 5.0 / 3600.0;
        let got = parse_dms("18°58'5''").unwrap();
        assert!((got - expected).abs() < 1e-10);
    }

    #[test]
    fn parse_without_trailing_seconds_marker() {
        let got = parse_dms("10°30'0").unwrap();
        assert!((got - 10.5).abs() < 1e-10);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_dms("invalid"),
            Err(BaseError::MalformedDegree(_))
        ));
    }

    #[test]
    fn parse_rejects_missing_minutes_delimiter() {
        assert!(parse_dms("18°585''").is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_part() {
        assert!(parse_dms("18°ab'5''").is_err());
    }

    #[test]
    fn format_parse_round_trip_within_arcsecond() {
        let one_arcsec = 1.0 / 3600.0;
        for &x in &[0.0, 13.4, 45.5, 123.456789, 359.999] {
            let back = parse_dms(&format_dms(x)).unwrap();
            assert!(
                (back - x).abs() < one_arcsec,
                "round trip of {x} drifted to {back}"
            );
        }
    }
}
