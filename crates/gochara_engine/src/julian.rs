//! Julian day / Gregorian calendar conversion.
//!
//! Fliegel & Van Flandern integer algorithm, valid for all Gregorian
//! dates of interest here. Julian days are UT; a civil date maps to the
//! JD at its midnight (day fraction 0 = 00:00 UT).

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date plus day fraction to a Julian day.
///
/// `day_frac` carries the time of day: `15.5` means the 15th at 12:00 UT.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let day = day_frac.floor() as i64;
    let frac = day_frac - day as f64;

    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64 - 0.5 + frac
}

/// Convert a Julian day back to (year, month, day-with-fraction).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_shifted = jd + 0.5;
    let z = jd_shifted.floor() as i64;
    let frac = jd_shifted - z as f64;

    let a = z + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as f64 + frac)
}
