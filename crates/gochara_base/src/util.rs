//! Shared utility functions for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Wrap a house number into the 1-12 cycle.
pub fn wrap_house(house: i32) -> u8 {
    (((house - 1).rem_euclid(12)) + 1) as u8
}

/// Cyclic distance between two houses: `min(|a - b|, 12 - |a - b|)`.
pub fn house_distance(a: u8, b: u8) -> u8 {
    let diff = (a as i32 - b as i32).unsigned_abs() as u8;
    diff.min(12 - diff)
}
