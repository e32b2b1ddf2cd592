//! Shared numeric helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// JavaScript-style rounding to the nearest integer (halves go up).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
