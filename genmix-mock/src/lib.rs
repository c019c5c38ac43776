use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use genmix_core::{GenMixError, IndexResponse, SeriesId, SeriesResponse, TimeSeriesSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

const HOUR_MS: i64 = 3_600_000;
const WEEK_HOURS: i64 = 7 * 24;

/// Mock source for CI-safe demos. Provides deterministic hourly data from static profiles.
///
/// Measured categories are published up to and including the anchor instant
/// (later hours are reported without a value); the forecast covers the whole
/// published week.
pub struct MockSource {
    anchor: DateTime<Utc>,
    fail_on: Option<SeriesId>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Build a mock anchored at [`MockSource::default_anchor`].
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(Self::default_anchor())
    }

    /// Build a mock whose latest published measurement is at `anchor`.
    #[must_use]
    pub const fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor,
            fail_on: None,
        }
    }

    /// Make every series fetch for `id` fail.
    #[must_use]
    pub const fn failing_on(mut self, id: SeriesId) -> Self {
        self.fail_on = Some(id);
        self
    }

    /// 2024-06-12T10:00:00Z, the instant demos freeze their clock at.
    #[must_use]
    pub fn default_anchor() -> DateTime<Utc> {
        DateTime::from_timestamp(1_718_186_400, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Anchor instant of this mock.
    #[must_use]
    pub const fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Published index timestamps (epoch millis), most recent first.
    ///
    /// The latest index starts two days before the anchor's midnight so the
    /// published week covers both the past day and several forecast days.
    #[must_use]
    pub fn index_timestamps(&self) -> Vec<i64> {
        let day_ms = 24 * HOUR_MS;
        let midnight = self.anchor.timestamp_millis().div_euclid(day_ms) * day_ms;
        let latest = midnight - 2 * day_ms;
        (0..3).map(|w| latest - w * WEEK_HOURS * HOUR_MS).collect()
    }
}

#[async_trait]
impl TimeSeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "genmix-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn latest_index(&self, _series: SeriesId) -> Result<IndexResponse, GenMixError> {
        Ok(IndexResponse {
            timestamps: self.index_timestamps(),
        })
    }

    async fn series(
        &self,
        series: SeriesId,
        index_ts: i64,
    ) -> Result<SeriesResponse, GenMixError> {
        if self.fail_on == Some(series) {
            return Err(GenMixError::source(
                self.name(),
                format!("forced failure: {series}"),
            ));
        }
        if !self.index_timestamps().contains(&index_ts) {
            return Err(GenMixError::source(
                self.name(),
                format!("no {series} series published at index {index_ts}"),
            ));
        }

        let start = DateTime::from_timestamp_millis(index_ts)
            .ok_or_else(|| GenMixError::Data(format!("timestamp out of range: {index_ts}")))?;
        let points = (0..WEEK_HOURS)
            .map(|h| {
                let ts = start + Duration::hours(h);
                let value = if series.is_forecast() {
                    fixtures::profile::forecast(ts)
                } else if ts <= self.anchor {
                    fixtures::profile::measured(series, ts)
                } else {
                    None
                };
                (ts.timestamp_millis(), value)
            })
            .collect();

        Ok(SeriesResponse { series: points })
    }
}
