//! Interval-string parsing

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

/// Pattern for interval strings: a count, one space, a unit
static INTERVAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+) (ms|s|min|h)$").unwrap());

/// Errors that can occur while parsing an interval string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("not a valid interval string: '{text}'")]
    Invalid { text: String },

    #[error("interval out of range: '{text}'")]
    Overflow { text: String },
}

/// Parse an interval string like `"5 ms"`, `"7 s"`, `"18 min"` or `"23 h"`.
///
/// The format is strict: a non-negative integer count, a single space and one
/// of the units `ms`, `s`, `min`, `h`. No sign, no fraction, no extra
/// whitespace.
///
/// # Errors
///
/// Returns [`IntervalError::Invalid`] for anything that does not match the
/// format, and [`IntervalError::Overflow`] if the count does not fit the
/// millisecond range of a `u64`.
///
/// # Example
///
/// ```rust
/// use candiff_util::interval;
/// use std::time::Duration;
///
/// assert_eq!(interval("18 min").unwrap(), Duration::from_secs(18 * 60));
/// assert!(interval("18min").is_err());
/// ```
pub fn interval(text: &str) -> Result<Duration, IntervalError> {
    let captures = INTERVAL_PATTERN
        .captures(text)
        .ok_or_else(|| IntervalError::Invalid { text: text.to_owned() })?;
    let count: u64 = captures[1]
        .parse()
        .map_err(|_| IntervalError::Overflow { text: text.to_owned() })?;
    let unit_ms: u64 = match &captures[2] {
        "ms" => 1,
        "s" => 1_000,
        "min" => 60_000,
        "h" => 3_600_000,
        _ => unreachable!("pattern admits no other unit"),
    };
    let millis = count
        .checked_mul(unit_ms)
        .ok_or_else(|| IntervalError::Overflow { text: text.to_owned() })?;
    Ok(Duration::from_millis(millis))
}
