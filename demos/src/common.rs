use std::sync::Arc;

use chrono::{DateTime, Utc};
use genmix::{Clock, FixedClock, GenMixBuilder, TimeSeriesSource};
use genmix_mock::MockSource;

/// Instant the demo source is anchored at and the demo clock is frozen at.
///
/// Reads an RFC 3339 instant from `GENMIX_DEMOS_ANCHOR` and falls back to
/// [`MockSource::default_anchor`] when unset or unparsable.
#[must_use]
pub fn anchor() -> DateTime<Utc> {
    std::env::var("GENMIX_DEMOS_ANCHOR")
        .ok()
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map_or_else(MockSource::default_anchor, |t| t.with_timezone(&Utc))
}

/// Return a source for demos.
#[must_use]
pub fn get_source() -> Arc<dyn TimeSeriesSource> {
    let at = anchor();
    println!("--- (Using mock source anchored at {at}) ---");
    Arc::new(MockSource::anchored_at(at))
}

/// Clock frozen at [`anchor`], so output is reproducible.
#[must_use]
pub fn get_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(anchor()))
}

/// Builder preloaded with the demo source and clock.
#[must_use]
pub fn builder() -> GenMixBuilder {
    genmix::GenMix::builder()
        .with_source(get_source())
        .clock(get_clock())
}
