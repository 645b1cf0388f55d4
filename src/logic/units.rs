/// Knots per meter/second
pub const MS_TO_KNOTS: f64 = 1.943844;

/// Knots per statute mile/hour
pub const MPH_TO_KNOTS: f64 = 0.868976;

/// Round to one decimal place
pub fn round_1dp(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Meters/second to knots, one decimal
pub fn ms_to_knots(ms: f64) -> f64 {
    round_1dp(ms * MS_TO_KNOTS)
}

/// Whole mph to the nearest whole knot
pub fn mph_to_knots(mph: u32) -> u32 {
    (mph as f64 * MPH_TO_KNOTS).round() as u32
}

/// Nearest whole knot; negative and non-finite speeds clamp to 0
pub fn whole_knots(kt: f64) -> u32 {
    if kt.is_finite() && kt > 0.0 {
        kt.round() as u32
    } else {
        0
    }
}
