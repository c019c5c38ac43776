//! Re-export of foundational types from `genmix-types`.
// Consolidated re-exports so downstream crates can depend on `genmix-core` only

pub use genmix_types::{AggregatedSample, IndexResponse, Sample, Series, SeriesResponse};
pub use genmix_types::{AlignmentPolicy, GenMixConfig, NowCorrection};
pub use genmix_types::{GenMixError, SeriesId};
