/// Core data types for the coastal observation toolkit.
///
/// This module defines the shared domain model imported by the other
/// modules. It contains no I/O — only types and their formatting.

use chrono::NaiveDateTime;
use std::fmt;

// ---------------------------------------------------------------------------
// Station products
// ---------------------------------------------------------------------------

/// A measured quantity offered by a CO-OPS tide station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// Verified/preliminary water level relative to a datum, in meters
    /// (metric) or feet (english). Native cadence is 6 minutes.
    WaterLevel,
    /// Barometric pressure at the station, in millibars.
    AirPressure,
}

impl Product {
    /// The product name as the CO-OPS `datagetter` API expects it.
    pub fn api_name(&self) -> &'static str {
        match self {
            Product::WaterLevel => "water_level",
            Product::AirPressure => "air_pressure",
        }
    }

    /// The value-column header used in exported CSV files.
    ///
    /// Water level keeps its full name; air pressure is abbreviated to
    /// `air`, matching the files the downstream analysis scripts expect.
    pub fn column_label(&self) -> &'static str {
        match self {
            Product::WaterLevel => "water_level",
            Product::AirPressure => "air",
        }
    }

    /// Whether a vertical datum (e.g. MLLW) applies to this product.
    /// The API rejects a `datum` parameter on non-water-level requests.
    pub fn uses_datum(&self) -> bool {
        matches!(self, Product::WaterLevel)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// Time-bucket width of a series: native 6-minute sampling or the
/// derived hourly mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    SixMin,
    OneHour,
}

impl Cadence {
    /// Label used in output filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Cadence::SixMin => "6min",
            Cadence::OneHour => "1hr",
        }
    }
}

// ---------------------------------------------------------------------------
// Observation series
// ---------------------------------------------------------------------------

/// A single timestamped measurement.
///
/// `value` is `None` when the station reported the interval but no
/// usable number (CO-OPS returns an empty `v` field for gaps). Missing
/// values serialize to empty CSV fields and are skipped by the
/// hourly-mean resampler.
#[derive(Debug, Clone, PartialEq)]
pub struct ObsRecord {
    pub timestamp: NaiveDateTime,
    pub value: Option<f64>,
}

/// An ordered time series for one product at one cadence.
///
/// Ordering by timestamp is guaranteed by the upstream API and preserved
/// by every transformation here; it is not re-verified locally.
#[derive(Debug, Clone, PartialEq)]
pub struct ObsSeries {
    pub product: Product,
    pub cadence: Cadence,
    pub records: Vec<ObsRecord>,
}

impl ObsSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing CO-OPS data.
#[derive(Debug, PartialEq)]
pub enum CoopsError {
    /// The request could not be sent or the transport failed mid-flight.
    Request(String),
    /// Non-2xx HTTP response from the CO-OPS API.
    HttpError(u16),
    /// The API answered with an error body (unknown station, invalid or
    /// oversized date range, unsupported product).
    ApiError(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The response was well-formed but contained no data values.
    NoData(String),
    /// The request bundle failed local validation before any network call.
    InvalidRequest(String),
}

impl fmt::Display for CoopsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoopsError::Request(msg) => write!(f, "Request failed: {}", msg),
            CoopsError::HttpError(code) => write!(f, "HTTP error: {}", code),
            CoopsError::ApiError(msg) => write!(f, "CO-OPS API error: {}", msg),
            CoopsError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CoopsError::NoData(station) => write!(f, "No data available for station: {}", station),
            CoopsError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for CoopsError {}
