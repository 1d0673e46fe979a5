/// Analysis utilities for the observation toolkit.
///
/// Submodules:
/// - `resample` — hourly-mean resampling of native-cadence station series.
/// - `resolution` — nearest-neighbor distances over projected mesh points.
/// - `stats` — descriptive statistics and the printed resolution report.

pub mod resample;
pub mod resolution;
pub mod stats;
