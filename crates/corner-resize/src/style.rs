//! CSS pixel length parsing and formatting

use crate::error::ResizeError;

/// Parse the leading integer of a CSS length such as `"200px"`.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit, so `"200.7px"` yields 200. A value with no leading digits is
/// an error.
pub fn parse_px(value: &str) -> Result<f32, ResizeError> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ResizeError::InvalidLength(value.to_string()));
    }

    let magnitude: f64 = rest[..digits]
        .parse()
        .map_err(|_| ResizeError::InvalidLength(value.to_string()))?;
    let magnitude = magnitude as f32;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a CSS length, falling back to 0 when it is not numeric
#[inline]
pub fn parse_px_or_zero(value: &str) -> f32 {
    parse_px(value).unwrap_or(0.0)
}

/// Format a dimension as a CSS pixel length
pub fn format_px(value: f32) -> String {
    format!("{}px", value)
}
