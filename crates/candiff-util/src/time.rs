//! Wall-clock and timer helpers

use crate::interval::{interval, IntervalError};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The current wall-clock time in UTC.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Wall-clock time elapsed since `earlier`.
///
/// Negative if `earlier` is in the future.
pub fn since(earlier: DateTime<Utc>) -> chrono::Duration {
    now() - earlier
}

/// A sleep delay: either a ready duration or an interval string parsed on use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delay {
    Duration(Duration),
    Interval(String),
}

impl From<Duration> for Delay {
    fn from(duration: Duration) -> Self {
        Delay::Duration(duration)
    }
}

impl From<&str> for Delay {
    fn from(text: &str) -> Self {
        Delay::Interval(text.to_owned())
    }
}

impl From<String> for Delay {
    fn from(text: String) -> Self {
        Delay::Interval(text)
    }
}

/// Sleep for a duration or an interval string.
///
/// # Errors
///
/// Returns [`IntervalError`] if a string delay fails to parse; the timer is
/// never started in that case.
///
/// # Example
///
/// ```rust
/// use candiff_util::sleep;
///
/// # tokio_test::block_on(async {
/// sleep("1 ms").await.unwrap();
/// sleep(std::time::Duration::from_millis(1)).await.unwrap();
/// # });
/// ```
pub async fn sleep(delay: impl Into<Delay>) -> Result<(), IntervalError> {
    let duration = match delay.into() {
        Delay::Duration(duration) => duration,
        Delay::Interval(text) => interval(&text)?,
    };
    tokio::time::sleep(duration).await;
    Ok(())
}
