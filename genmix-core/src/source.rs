use async_trait::async_trait;

use crate::time::instant_from_millis;
use crate::{GenMixError, IndexResponse, Sample, Series, SeriesId, SeriesResponse};

/// Collaborator that retrieves published generation series.
///
/// Implementations own transport, authentication, and retry concerns and hand
/// back already-parsed payloads. Timestamps are epoch milliseconds.
#[async_trait]
pub trait TimeSeriesSource: Send + Sync {
    /// A stable identifier used to tag errors (e.g. "smard", "genmix-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the publication index for `series`, most recent timestamp first.
    async fn latest_index(&self, series: SeriesId) -> Result<IndexResponse, GenMixError>;

    /// Fetch the raw series for `series` anchored at `index_ts`.
    async fn series(&self, series: SeriesId, index_ts: i64)
    -> Result<SeriesResponse, GenMixError>;
}

/// Resolve the most recent index timestamp of `series`.
///
/// # Errors
/// Propagates the source's error and returns `EmptyIndex` when the index
/// carries no timestamps.
pub async fn latest_index_ts(
    source: &dyn TimeSeriesSource,
    series: SeriesId,
) -> Result<i64, GenMixError> {
    let index = source.latest_index(series).await?;
    index
        .timestamps
        .first()
        .copied()
        .ok_or(GenMixError::empty_index(series))
}

/// Fetch `series` at `index_ts` and decode it into instants.
///
/// # Errors
/// Propagates the source's error and returns `Data` if a timestamp cannot be
/// represented as an instant.
pub async fn fetch_series(
    source: &dyn TimeSeriesSource,
    series: SeriesId,
    index_ts: i64,
) -> Result<Series, GenMixError> {
    let raw = source.series(series, index_ts).await?;
    decode_series(&raw)
}

/// Convert a raw payload into samples using the shared timestamp conversion.
///
/// # Errors
/// Returns `Data` if any timestamp is out of the representable range.
pub fn decode_series(raw: &SeriesResponse) -> Result<Series, GenMixError> {
    raw.series
        .iter()
        .map(|&(ms, value)| {
            let ts = instant_from_millis(ms)?;
            Ok::<_, GenMixError>(Sample::new(ts, value))
        })
        .collect()
}
