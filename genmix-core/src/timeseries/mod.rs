//! Time-series utilities used by the aggregator.
//!
//! Modules include:
//! - `window`: trim series to the recent-past and future windows
//! - `sum`: combine several generation series into one total
/// Recent-past and future window trimming.
pub mod window;
/// Summation of aligned generation series and splicing of the two windows.
pub mod sum;
