//! Genmix-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod sample;
mod series_id;

pub use config::{AlignmentPolicy, GenMixConfig, NowCorrection};
pub use error::GenMixError;
pub use sample::{AggregatedSample, IndexResponse, Sample, Series, SeriesResponse};
pub use series_id::SeriesId;
