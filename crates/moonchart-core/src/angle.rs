/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
