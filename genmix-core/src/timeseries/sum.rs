use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{AggregatedSample, AlignmentPolicy, GenMixError, Series, SeriesId};

/// Sum several series according to `policy`.
///
/// # Errors
/// Only `AlignmentPolicy::Strict` can fail; see [`sum_positional`].
pub fn sum_aligned(
    policy: AlignmentPolicy,
    series: &[(SeriesId, Series)],
) -> Result<Vec<AggregatedSample>, GenMixError> {
    match policy {
        AlignmentPolicy::ByTimestamp => Ok(sum_by_timestamp(series)),
        AlignmentPolicy::Strict => sum_positional(series, true),
        AlignmentPolicy::Shortest => sum_positional(series, false),
    }
}

/// Merge series keyed by timestamp and sum values per timestamp.
///
/// - Absent values and timestamps missing from a series contribute zero.
/// - Output is sorted by timestamp with one entry per distinct timestamp.
#[must_use]
pub fn sum_by_timestamp(series: &[(SeriesId, Series)]) -> Vec<AggregatedSample> {
    let mut totals: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
    for (_, s) in series {
        for sample in s {
            *totals.entry(sample.ts).or_insert(0.0) += sample.value.unwrap_or(0.0);
        }
    }
    totals
        .into_iter()
        .map(|(ts, value)| AggregatedSample::new(ts, value))
        .collect()
}

/// Walk series by position and sum values at each position.
///
/// Timestamps are taken from the first series. With `strict`, every series must
/// match the first one in length and timestamps; otherwise iteration stops at
/// the shortest series.
///
/// # Errors
/// With `strict`, returns `Misaligned` on a length mismatch and
/// `TimestampMismatch` when timestamps differ at a position.
pub fn sum_positional(
    series: &[(SeriesId, Series)],
    strict: bool,
) -> Result<Vec<AggregatedSample>, GenMixError> {
    let Some((_, first)) = series.first() else {
        return Ok(Vec::new());
    };

    let len = if strict {
        for (id, s) in &series[1..] {
            if s.len() != first.len() {
                return Err(GenMixError::Misaligned {
                    series: *id,
                    expected: first.len(),
                    actual: s.len(),
                });
            }
            if let Some(position) = first.iter().zip(s).position(|(a, b)| a.ts != b.ts) {
                return Err(GenMixError::TimestampMismatch {
                    series: *id,
                    position,
                });
            }
        }
        first.len()
    } else {
        let shortest = series.iter().map(|(_, s)| s.len()).min().unwrap_or(0);
        #[cfg(feature = "tracing")]
        if series.iter().any(|(_, s)| s.len() != shortest) {
            tracing::warn!(
                shortest,
                longest = series.iter().map(|(_, s)| s.len()).max().unwrap_or(0),
                "series lengths differ; truncating to the shortest"
            );
        }
        shortest
    };

    Ok((0..len)
        .map(|i| {
            let value: f64 = series
                .iter()
                .map(|(_, s)| s[i].value.unwrap_or(0.0))
                .sum();
            AggregatedSample::new(first[i].ts, value)
        })
        .collect())
}

/// Concatenate the recent-past total and the future forecast.
///
/// Future samples at or before the last past timestamp are dropped so the
/// result stays strictly ascending.
#[must_use]
pub fn splice(
    mut past: Vec<AggregatedSample>,
    future: Vec<AggregatedSample>,
) -> Vec<AggregatedSample> {
    let last = past.last().map(|s| s.ts);
    past.extend(
        future
            .into_iter()
            .filter(|f| last.is_none_or(|l| f.ts > l)),
    );
    past
}
