/// Ingest clients for external observation services.
///
/// Submodules:
/// - `coops` — NOAA CO-OPS `datagetter` API client (water level,
///   air pressure).

pub mod coops;
