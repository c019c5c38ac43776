//! Series samples and the raw collaborator payloads they are decoded from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reported point of a generation series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Instant the value refers to.
    pub ts: DateTime<Utc>,
    /// Reported value; `None` when nothing was published for `ts`.
    pub value: Option<f64>,
}

impl Sample {
    /// Build a sample from its parts.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: Option<f64>) -> Self {
        Self { ts, value }
    }
}

/// Samples of one series, ascending by timestamp.
pub type Series = Vec<Sample>;

/// One point of the combined output series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSample {
    /// Instant the value refers to.
    pub ts: DateTime<Utc>,
    /// Summed generation (past window) or forecast value (future window).
    pub value: f64,
}

impl AggregatedSample {
    /// Build an aggregated sample from its parts.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Publication index of a series as returned by the collaborator.
///
/// Timestamps are epoch milliseconds, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Available index timestamps, descending.
    pub timestamps: Vec<i64>,
}

/// Raw series payload as returned by the collaborator.
///
/// Each entry is `[epoch_millis, value-or-null]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Raw points, ascending by timestamp.
    pub series: Vec<(i64, Option<f64>)>,
}
