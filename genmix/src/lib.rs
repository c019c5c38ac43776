//! GenMix combines published electricity generation series into one total.
//!
//! Overview
//! - Reads every series through a single `TimeSeriesSource` collaborator from `genmix_core`.
//! - Sums the measured generation categories over a recent-past window.
//! - Appends the published total-generation forecast from the corrected current instant on.
//! - Normalizes error handling and exposes the shared types from `genmix_core`.
//!
//! Key behaviors and trade-offs
//! - Fan-out: past and future run concurrently, and so do the per-category
//!   fetches. Every join is all-or-nothing; one failed fetch fails the call.
//! - Alignment:
//!   - `ByTimestamp` (default): merges by timestamp; tolerant of ragged series.
//!   - `Strict`: positional sum that rejects any length or timestamp mismatch.
//!   - `Shortest`: positional sum truncated to the shortest series.
//! - Corrected now: a fixed offset and optional floor step move the boundary
//!   between past and future, e.g. to account for publication lag.
//! - Time: the raw instant comes from an injectable `Clock`, so results are
//!   reproducible with `FixedClock`.
//!
//! Examples
//! Building an aggregator and computing the total:
//! ```rust,ignore
//! use std::sync::Arc;
//! use genmix::{GenMix, NowCorrection};
//!
//! let genmix = GenMix::builder()
//!     .with_source(Arc::new(SmardSource::new()))
//!     .now_correction(NowCorrection::offset(-2 * 3600).floored_to(3600))
//!     .build()?;
//!
//! for s in genmix.total_generation().await? {
//!     println!("{} {:.0} MW", s.ts, s.value);
//! }
//! ```
//!
//! Computing only one half:
//! ```rust,ignore
//! let past = genmix.recent_past_total().await?;
//! let future = genmix.future_forecast().await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod aggregate;
mod core;

pub use crate::core::{GenMix, GenMixBuilder, tag_err};

pub use genmix_core::{
    AggregatedSample, AlignmentPolicy, Clock, FixedClock, GenMixConfig, GenMixError,
    IndexResponse, NowCorrection, Sample, Series, SeriesId, SeriesResponse, SystemClock,
    TimeSeriesSource,
};
