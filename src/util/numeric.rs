//! Numeric input parsing and clamping for panel controls
//!
//! Every numeric field written to a page or cell passes through one of the
//! clamp helpers. User text that does not parse to a finite number falls back
//! to the previously committed value instead of committing `NaN`.

/// Parse user input, falling back to `previous` when it isn't a finite number
pub fn parse_or(input: &str, previous: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => previous,
    }
}

/// `max(0, value)` for spacing-like fields (margins, padding, gap, line height)
pub fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0)
}

/// `max(1, value)` for "at least one" fields (grid columns/rows, font size)
pub fn clamp_at_least_one(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.max(1.0)
}

/// Round and clamp into a non-negative integer spacing value
pub fn to_spacing(value: f64) -> u32 {
    clamp_non_negative(value).round().min(u32::MAX as f64) as u32
}

/// Round and clamp into an integer count of at least one
pub fn to_count(value: f64) -> u32 {
    clamp_at_least_one(value).round().min(u32::MAX as f64) as u32
}

/// Parse a spacing input against the committed value
pub fn parse_spacing(input: &str, committed: u32) -> u32 {
    to_spacing(parse_or(input, committed as f64))
}

/// Parse a count input against the committed value
pub fn parse_count(input: &str, committed: u32) -> u32 {
    to_count(parse_or(input, committed as f64))
}
