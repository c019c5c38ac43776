use genmix_core::source::fetch_series;
use genmix_core::{GenMixError, Series, SeriesId, TimeSeriesSource};

/// Fetch every series in `ids` at `index_ts` concurrently.
///
/// The output keeps the order of `ids`. The first failure wins and in-flight
/// siblings are dropped; there is no partial result.
///
/// # Errors
/// Returns the first error any fetch produced.
pub async fn fetch_all(
    source: &dyn TimeSeriesSource,
    ids: &[SeriesId],
    index_ts: i64,
) -> Result<Vec<(SeriesId, Series)>, GenMixError> {
    let tasks = ids.iter().map(|&id| async move {
        let series = fetch_series(source, id, index_ts).await?;
        Ok::<_, GenMixError>((id, series))
    });
    futures::future::try_join_all(tasks).await
}
