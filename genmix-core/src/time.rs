use chrono::{DateTime, TimeDelta, Utc};

use crate::{GenMixError, NowCorrection};

/// Convert a collaborator timestamp (epoch milliseconds) into an instant.
///
/// This is the only numeric-to-instant conversion used for series data.
///
/// # Errors
/// Returns `Data` if `ms` is outside the range `chrono` can represent.
pub fn instant_from_millis(ms: i64) -> Result<DateTime<Utc>, GenMixError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| GenMixError::Data(format!("timestamp out of range: {ms}")))
}

/// Apply the configured correction to a raw instant.
///
/// The offset is added first; the result is then floored to a multiple of the
/// floor step since the Unix epoch. Non-positive steps and unrepresentable
/// results leave the value as it was before that step.
#[must_use]
pub fn corrected_now(raw: DateTime<Utc>, correction: &NowCorrection) -> DateTime<Utc> {
    let shifted = TimeDelta::try_seconds(correction.offset_secs)
        .and_then(|d| raw.checked_add_signed(d))
        .unwrap_or(raw);

    match correction.floor_secs {
        Some(step) if step > 0 => {
            let secs = shifted.timestamp().div_euclid(step) * step;
            DateTime::from_timestamp(secs, 0).unwrap_or(shifted)
        }
        _ => shifted,
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The raw (uncorrected) current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant, for tests and replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
