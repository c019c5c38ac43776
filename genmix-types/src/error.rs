use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SeriesId;

/// Unified error type for the genmix workspace.
///
/// Covers collaborator failures, empty publication indices, misaligned input
/// series, malformed payloads, and configuration validation errors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenMixError {
    /// A time-series source failed to deliver an index or a series.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The source returned an index without any timestamps.
    #[error("empty index for {series}")]
    EmptyIndex {
        /// Series whose index was empty.
        series: SeriesId,
    },

    /// Strict alignment found a series whose length differs from the first one.
    #[error("misaligned series {series}: expected {expected} samples, got {actual}")]
    Misaligned {
        /// Series that did not match.
        series: SeriesId,
        /// Sample count of the first (reference) series.
        expected: usize,
        /// Sample count of the offending series.
        actual: usize,
    },

    /// Strict alignment found differing timestamps at the same position.
    #[error("misaligned series {series}: timestamp mismatch at position {position}")]
    TimestampMismatch {
        /// Series that did not match.
        series: SeriesId,
        /// Zero-based position of the first mismatch.
        position: usize,
    },

    /// Issues with the returned data (unrepresentable timestamps, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GenMixError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `EmptyIndex` error for a series.
    #[must_use]
    pub const fn empty_index(series: SeriesId) -> Self {
        Self::EmptyIndex { series }
    }

    /// Returns true if the error originates from fetching (source failure or empty index)
    /// rather than from combining already fetched data.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Source { .. } | Self::EmptyIndex { .. })
    }
}
