use crate::GenMix;
use crate::core::Reference;
use genmix_core::source::{fetch_series, latest_index_ts};
use genmix_core::{AggregatedSample, GenMixError, trim_future};

impl GenMix {
    /// Forecast of total generation from the corrected current instant onward.
    ///
    /// Samples before corrected-now and samples without a value are dropped;
    /// the rest are returned unchanged, in source order.
    ///
    /// # Errors
    /// Fails if the forecast index is empty or the fetch fails.
    pub async fn future_forecast(&self) -> Result<Vec<AggregatedSample>, GenMixError> {
        self.future_at(self.reference()).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "genmix::aggregate::future",
            skip(self),
            fields(
                source = self.source.name(),
                forecast = %self.cfg.forecast,
                from = %at.corrected,
            ),
        )
    )]
    pub(crate) async fn future_at(
        &self,
        at: Reference,
    ) -> Result<Vec<AggregatedSample>, GenMixError> {
        let source = self.source.as_ref();
        let index_ts = latest_index_ts(source, self.cfg.forecast)
            .await
            .map_err(|e| self.tag(e))?;
        let series = fetch_series(source, self.cfg.forecast, index_ts)
            .await
            .map_err(|e| self.tag(e))?;
        let out = trim_future(series, at.corrected);
        #[cfg(feature = "tracing")]
        tracing::debug!(index_ts, samples = out.len(), "kept forecast samples");
        Ok(out)
    }
}
