use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use genmix_core::{
    AlignmentPolicy, Clock, GenMixConfig, GenMixError, NowCorrection, SeriesId, SystemClock,
    TimeSeriesSource, corrected_now,
};

/// Aggregator that combines published generation series into one total.
pub struct GenMix {
    pub(crate) source: Arc<dyn TimeSeriesSource>,
    pub(crate) cfg: GenMixConfig,
    pub(crate) past_window: TimeDelta,
    pub(crate) clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for GenMix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenMix")
            .field("source", &self.source.name())
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `GenMix` aggregator with custom configuration.
pub struct GenMixBuilder {
    source: Option<Arc<dyn TimeSeriesSource>>,
    cfg: GenMixConfig,
    clock: Arc<dyn Clock>,
}

impl Default for GenMixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GenMixBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no source; you must register one via [`with_source`](Self::with_source).
    /// - Defaults sum all twelve generation categories over the last 24 hours,
    ///   anchored on biomass, with the total-generation forecast as the future tail.
    /// - No correction is applied to the current instant and the wall clock is used.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: GenMixConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Register the series source.
    ///
    /// Registering a second source replaces the first; every series is read
    /// from the same collaborator so that index timestamps line up.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TimeSeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the set of generation series summed for the recent past.
    ///
    /// Behavior and trade-offs:
    /// - Order matters for positional alignment: the first series supplies the
    ///   output timestamps under `Strict` and `Shortest`.
    /// - Repeated identifiers are dropped at build time, keeping the first.
    #[must_use]
    pub fn generation_sources(mut self, ids: &[SeriesId]) -> Self {
        self.cfg.generation_sources = ids.to_vec();
        self
    }

    /// Series whose latest index anchors every recent-past fetch.
    #[must_use]
    pub const fn anchor(mut self, id: SeriesId) -> Self {
        self.cfg.anchor = id;
        self
    }

    /// Series used for the future window. Must be a forecast series.
    #[must_use]
    pub const fn forecast(mut self, id: SeriesId) -> Self {
        self.cfg.forecast = id;
        self
    }

    /// Length of the recent-past window, measured back from the raw current instant.
    #[must_use]
    pub const fn past_window(mut self, window: std::time::Duration) -> Self {
        self.cfg.past_window = window;
        self
    }

    /// Correction applied to the current instant before it splits past from future.
    ///
    /// Behavior and trade-offs:
    /// - A negative offset holds back the boundary to account for publication lag;
    ///   the past window then ends earlier and the forecast starts earlier.
    /// - A floor step aligns the boundary to the series resolution so that a
    ///   sample sitting exactly on the boundary belongs to both windows and is
    ///   kept once, on the past side.
    #[must_use]
    pub const fn now_correction(mut self, correction: NowCorrection) -> Self {
        self.cfg.now_correction = correction;
        self
    }

    /// Select how recent-past series are aligned before summing.
    ///
    /// Behavior and trade-offs:
    /// - `ByTimestamp`: tolerant of ragged series; a timestamp missing from one
    ///   series counts as zero for it.
    /// - `Strict`: fails fast when lengths or timestamps disagree; use it to
    ///   detect publication gaps rather than paper over them.
    /// - `Shortest`: positional sum truncated to the shortest series; trailing
    ///   hours published by only some categories are dropped.
    #[must_use]
    pub const fn alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.cfg.alignment = policy;
        self
    }

    /// Inject the clock that supplies the raw current instant.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: GenMixConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `GenMix` aggregator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source is registered, the generation set is
    /// empty or contains a forecast series, the anchor is a forecast series,
    /// the forecast is not a forecast series, the past window is not positive,
    /// the correction offset is out of range, or the floor step is not positive.
    pub fn build(mut self) -> Result<GenMix, GenMixError> {
        // Dedup generation ids, keeping the first occurrence.
        let mut seen = std::collections::HashSet::new();
        self.cfg.generation_sources.retain(|id| seen.insert(*id));

        let Some(source) = self.source else {
            return Err(GenMixError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            ));
        };
        if self.cfg.generation_sources.is_empty() {
            return Err(GenMixError::InvalidArg(
                "generation_sources must not be empty".to_string(),
            ));
        }
        if let Some(id) = self
            .cfg
            .generation_sources
            .iter()
            .find(|id| id.is_forecast())
        {
            return Err(GenMixError::InvalidArg(format!(
                "forecast series {id} cannot be summed as generation"
            )));
        }
        if self.cfg.anchor.is_forecast() {
            return Err(GenMixError::InvalidArg(format!(
                "forecast series {} cannot anchor the recent past",
                self.cfg.anchor
            )));
        }
        if !self.cfg.forecast.is_forecast() {
            return Err(GenMixError::InvalidArg(format!(
                "{} is not a forecast series",
                self.cfg.forecast
            )));
        }
        let past_window = TimeDelta::from_std(self.cfg.past_window)
            .ok()
            .filter(|w| *w > TimeDelta::zero())
            .ok_or_else(|| {
                GenMixError::InvalidArg(format!(
                    "past_window must be positive and representable, got {:?}",
                    self.cfg.past_window
                ))
            })?;
        if TimeDelta::try_seconds(self.cfg.now_correction.offset_secs).is_none() {
            return Err(GenMixError::InvalidArg(format!(
                "now_correction offset out of range, got {}s",
                self.cfg.now_correction.offset_secs
            )));
        }
        if let Some(step) = self.cfg.now_correction.floor_secs
            && step <= 0
        {
            return Err(GenMixError::InvalidArg(format!(
                "now_correction floor step must be positive, got {step}"
            )));
        }

        Ok(GenMix {
            source,
            cfg: self.cfg,
            past_window,
            clock: self.clock,
        })
    }
}

/// Tag an error coming back from the source with the source name.
///
/// Errors that already identify their origin, and decoding errors raised on
/// this side, pass through unchanged.
pub fn tag_err(source: &str, e: GenMixError) -> GenMixError {
    match e {
        e @ (GenMixError::Source { .. }
        | GenMixError::EmptyIndex { .. }
        | GenMixError::Data(_)
        | GenMixError::Misaligned { .. }
        | GenMixError::TimestampMismatch { .. }) => e,
        other => GenMixError::Source {
            source_name: source.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Raw and corrected reading of the clock, shared by both halves of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reference {
    pub(crate) raw: DateTime<Utc>,
    pub(crate) corrected: DateTime<Utc>,
}

impl GenMix {
    /// Start building a new `GenMix` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use genmix::{AlignmentPolicy, GenMix, NowCorrection};
    ///
    /// let genmix = GenMix::builder()
    ///     .with_source(Arc::new(SmardSource::new()))
    ///     .now_correction(NowCorrection::offset(-3600).floored_to(900))
    ///     .alignment(AlignmentPolicy::Strict)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> GenMixBuilder {
        GenMixBuilder::new()
    }

    /// Effective configuration after build-time normalization.
    #[must_use]
    pub const fn config(&self) -> &GenMixConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub(crate) fn reference(&self) -> Reference {
        let raw = self.clock.now();
        Reference {
            raw,
            corrected: corrected_now(raw, &self.cfg.now_correction),
        }
    }

    pub(crate) fn tag(&self, e: GenMixError) -> GenMixError {
        tag_err(self.source.name(), e)
    }
}
