use chrono::{DateTime, TimeDelta, Utc};

use crate::{AggregatedSample, Series};

/// Half-open window `(after, until]` selecting recent-past samples.
///
/// `after` is derived from the raw current instant; `until` is the corrected
/// instant, which is also the inclusive lower bound of the future window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastWindow {
    /// Exclusive lower bound.
    pub after: DateTime<Utc>,
    /// Inclusive upper bound (corrected now).
    pub until: DateTime<Utc>,
}

impl PastWindow {
    /// Build the window ending at `corrected_now` and reaching back `length` from `raw_now`.
    #[must_use]
    pub fn new(raw_now: DateTime<Utc>, length: TimeDelta, corrected_now: DateTime<Utc>) -> Self {
        Self {
            after: raw_now
                .checked_sub_signed(length)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            until: corrected_now,
        }
    }

    /// Whether `ts` falls inside the window.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts > self.after && ts <= self.until
    }
}

/// Keep only samples inside `window`, preserving order and absent values.
#[must_use]
pub fn trim_recent_past(series: Series, window: &PastWindow) -> Series {
    series
        .into_iter()
        .filter(|s| window.contains(s.ts))
        .collect()
}

/// Keep samples at or after `corrected_now` that carry a value.
#[must_use]
pub fn trim_future(series: Series, corrected_now: DateTime<Utc>) -> Vec<AggregatedSample> {
    series
        .into_iter()
        .filter(|s| s.ts >= corrected_now)
        .filter_map(|s| s.value.map(|v| AggregatedSample::new(s.ts, v)))
        .collect()
}
