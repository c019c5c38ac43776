use crate::GenMix;
use genmix_core::{AggregatedSample, GenMixError, splice};

impl GenMix {
    /// Recent-past total followed by the forecast tail.
    ///
    /// Behavior and trade-offs:
    /// - The clock is read once; both halves share the same corrected-now, so
    ///   the past ends exactly where the forecast begins.
    /// - Both halves run concurrently and the call fails if either fails.
    ///   Nothing partial is returned.
    /// - Forecast samples at or before the last past timestamp are dropped, so
    ///   the result is strictly ascending.
    ///
    /// # Errors
    /// Returns the first error from either half.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "genmix::aggregate::total_generation",
            skip(self),
            fields(source = self.source.name()),
        )
    )]
    pub async fn total_generation(&self) -> Result<Vec<AggregatedSample>, GenMixError> {
        let at = self.reference();
        let (past, future) = tokio::try_join!(self.recent_past_at(at), self.future_at(at))?;
        Ok(splice(past, future))
    }
}
