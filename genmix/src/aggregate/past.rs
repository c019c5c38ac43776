use crate::GenMix;
use crate::core::Reference;
use genmix_core::source::latest_index_ts;
use genmix_core::{
    AggregatedSample, GenMixError, PastWindow, Series, SeriesId, sum_aligned, trim_recent_past,
};

impl GenMix {
    /// Total generation over the recent-past window.
    ///
    /// Behavior:
    /// - Resolves the latest index of the anchor series and fetches every
    ///   configured generation series at that index concurrently.
    /// - Each series is trimmed to `(now - past_window, corrected_now]` and the
    ///   trimmed series are summed under the configured `AlignmentPolicy`.
    /// - An absent value contributes zero to the sum.
    ///
    /// # Errors
    /// Fails as a whole if the anchor index is empty, if any fetch fails, or if
    /// strict alignment rejects the trimmed series.
    pub async fn recent_past_total(&self) -> Result<Vec<AggregatedSample>, GenMixError> {
        self.recent_past_at(self.reference()).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "genmix::aggregate::past",
            skip(self),
            fields(
                source = self.source.name(),
                anchor = %self.cfg.anchor,
                sources = self.cfg.generation_sources.len(),
                until = %at.corrected,
            ),
        )
    )]
    pub(crate) async fn recent_past_at(
        &self,
        at: Reference,
    ) -> Result<Vec<AggregatedSample>, GenMixError> {
        let index_ts = latest_index_ts(self.source.as_ref(), self.cfg.anchor)
            .await
            .map_err(|e| self.tag(e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(index_ts, "resolved anchor index");

        let fetched = crate::aggregate::util::fetch_all(
            self.source.as_ref(),
            &self.cfg.generation_sources,
            index_ts,
        )
        .await
        .map_err(|e| self.tag(e))?;

        let window = PastWindow::new(at.raw, self.past_window, at.corrected);
        let trimmed: Vec<(SeriesId, Series)> = fetched
            .into_iter()
            .map(|(id, s)| (id, trim_recent_past(s, &window)))
            .collect();

        let total = sum_aligned(self.cfg.alignment, &trimmed)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(samples = total.len(), "summed recent past");
        Ok(total)
    }
}
