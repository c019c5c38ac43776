//! Configuration types shared by the aggregator and its helpers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::SeriesId;

/// How trimmed generation series are combined into one total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentPolicy {
    /// Merge by timestamp; a timestamp missing from a series contributes zero for it.
    #[default]
    ByTimestamp,
    /// Walk the series by position and fail if lengths or timestamps differ.
    Strict,
    /// Walk the series by position, truncated to the shortest one.
    Shortest,
}

/// Fixed correction applied to the current instant before it is used as the
/// boundary between the past and the future window.
///
/// The offset is applied first; the result is then rounded down to a multiple
/// of `floor_secs` since the Unix epoch when set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NowCorrection {
    /// Signed offset in seconds added to the raw instant.
    pub offset_secs: i64,
    /// Optional step in seconds the corrected instant is floored to.
    pub floor_secs: Option<i64>,
}

impl NowCorrection {
    /// No correction: corrected-now equals the raw instant.
    pub const NONE: Self = Self {
        offset_secs: 0,
        floor_secs: None,
    };

    /// Correction by a signed offset only.
    #[must_use]
    pub const fn offset(offset_secs: i64) -> Self {
        Self {
            offset_secs,
            floor_secs: None,
        }
    }

    /// Add a floor step to this correction.
    #[must_use]
    pub const fn floored_to(mut self, floor_secs: i64) -> Self {
        self.floor_secs = Some(floor_secs);
        self
    }
}

/// Global configuration for the `GenMix` aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenMixConfig {
    /// Generation series summed for the recent-past window, in alignment order.
    pub generation_sources: Vec<SeriesId>,
    /// Series whose latest index anchors every recent-past fetch.
    pub anchor: SeriesId,
    /// Series used for the future window.
    pub forecast: SeriesId,
    /// Length of the recent-past window.
    pub past_window: Duration,
    /// Correction applied to the current instant at both window boundaries.
    pub now_correction: NowCorrection,
    /// How recent-past series are aligned before summing.
    pub alignment: AlignmentPolicy,
}

impl Default for GenMixConfig {
    fn default() -> Self {
        Self {
            generation_sources: SeriesId::GENERATION.to_vec(),
            anchor: SeriesId::Biomass,
            forecast: SeriesId::TotalGenerationForecast,
            past_window: Duration::from_secs(24 * 60 * 60),
            now_correction: NowCorrection::NONE,
            alignment: AlignmentPolicy::default(),
        }
    }
}
