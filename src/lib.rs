//! Coastal observation toolkit for the Louisiana coast.
//!
//! Two independent analytical pipelines share this library:
//!
//! 1. **Station data export** — pull water-level and air-pressure series
//!    from the NOAA CO-OPS tide-station API, derive an hourly-mean series
//!    from the native 6-minute cadence, and write both to CSV
//!    (`bin/download_station_data`).
//! 2. **Mesh resolution diagnostic** — load edge coordinates from an
//!    unstructured-grid NetCDF file, project them to UTM, compute each
//!    point's nearest-neighbor distance, report statistics, and render a
//!    connectivity figure (`bin/grid_resolution`).
//!
//! The pipelines share no state; each binary is a straight-line sequence
//! of library calls.

pub mod analysis;
pub mod config;
pub mod export;
pub mod geo;
pub mod ingest;
pub mod logging;
pub mod mesh;
pub mod model;
pub mod plot;
pub mod stations;
