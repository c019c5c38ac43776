//! genmix-core
//!
//! Core types, traits, and utilities shared across the genmix workspace.
//!
//! - `types`: re-exports of the data model, error and configuration types.
//! - `source`: the `TimeSeriesSource` collaborator trait and fetch helpers.
//! - `time`: numeric-to-instant conversion, corrected-now, and clocks.
//! - `timeseries`: window trimming and summation of generation series.
#![warn(missing_docs)]

/// The `TimeSeriesSource` collaborator trait and helpers built on it.
pub mod source;
/// Timestamp conversion, the corrected-now rule, and injectable clocks.
pub mod time;
/// Window trimming and summation utilities.
pub mod timeseries;
pub mod types;

pub use source::TimeSeriesSource;
pub use time::{Clock, FixedClock, SystemClock, corrected_now, instant_from_millis};
pub use timeseries::sum::{splice, sum_aligned, sum_by_timestamp, sum_positional};
pub use timeseries::window::{PastWindow, trim_future, trim_recent_past};
pub use types::*;
