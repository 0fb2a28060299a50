//! MM:SS duration parsing and formatting
//!
//! Job records carry `created`/`updated` timestamps as `"MM:SS"` text,
//! optionally with fractional seconds (`"4:03.5"`). Parsing never
//! substitutes a default value for bad input: a record with an
//! unparseable timestamp must be distinguishable from one that took
//! zero seconds.

use thiserror::Error;

/// Why a `MM:SS` value could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    /// Input did not have exactly two fields separated by one colon
    #[error("expected MM:SS with exactly one ':', got {0:?}")]
    BadShape(String),
    /// A field was present but not a non-negative number
    #[error("non-numeric duration component {0:?}")]
    BadComponent(String),
}

/// Parse a `"MM:SS[.s]"` value into total seconds.
///
/// Minutes and seconds must both be non-negative finite numbers;
/// seconds may carry a fractional part. Anything else is an error,
/// never a default.
pub fn parse_mm_ss(text: &str) -> Result<f32, ParseDurationError> {
    let Some((minutes, seconds)) = text.split_once(':') else {
        return Err(ParseDurationError::BadShape(text.to_string()));
    };
    if seconds.contains(':') {
        return Err(ParseDurationError::BadShape(text.to_string()));
    }
    let minutes = parse_component(minutes)?;
    let seconds = parse_component(seconds)?;
    Ok(minutes * 60.0 + seconds)
}

fn parse_component(field: &str) -> Result<f32, ParseDurationError> {
    let value: f32 = field
        .trim()
        .parse()
        .map_err(|_| ParseDurationError::BadComponent(field.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ParseDurationError::BadComponent(field.to_string()));
    }
    Ok(value)
}

/// Format seconds back into `M:SS.s` text (e.g. for the average
/// response time line in the summary).
pub fn format_mm_ss(total_secs: f32) -> String {
    let minutes = (total_secs / 60.0).floor() as u32;
    let seconds = total_secs - (minutes as f32) * 60.0;
    format!("{}:{:05.2}", minutes, seconds)
}
