/// NOAA CO-OPS Data API Client
///
/// Retrieves tide-station time series (water level, air pressure) from
/// the Center for Operational Oceanographic Products and Services
/// `datagetter` endpoint.
///
/// API Documentation: https://api.tidesandcurrents.noaa.gov/api/prod/

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::model::{Cadence, CoopsError, ObsRecord, ObsSeries, Product};

const COOPS_BASE_URL: &str = "https://api.tidesandcurrents.noaa.gov/api/prod/datagetter";

/// Identifier sent as the `application` parameter, as CO-OPS asks of
/// automated clients.
const APPLICATION: &str = "baymon_tools";

/// Timestamp format used in `datagetter` JSON responses.
const COOPS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ============================================================================
// Request bundle
// ============================================================================

/// Parameters for a single product download.
///
/// `begin_date`/`end_date` are inclusive calendar-day bounds in
/// `YYYYMMDD` form. `datum` only applies to water level; it is ignored
/// (and omitted from the URL) for other products.
#[derive(Debug, Clone)]
pub struct DataRequest {
    pub begin_date: String,
    pub end_date: String,
    pub product: Product,
    pub units: String,
    pub datum: Option<String>,
    pub time_zone: String,
}

// ============================================================================
// CO-OPS API Response Structures
// ============================================================================

/// Top-level `datagetter` JSON response. Exactly one of `data` or
/// `error` is present.
#[derive(Debug, Deserialize)]
pub struct CoopsResponse {
    pub metadata: Option<CoopsMetadata>,
    pub data: Option<Vec<CoopsObservation>>,
    pub error: Option<CoopsApiError>,
}

/// Station metadata echoed back with data responses.
#[derive(Debug, Deserialize)]
pub struct CoopsMetadata {
    pub id: String,
    pub name: String,
    pub lat: String,
    pub lon: String,
}

/// A single observation row. All fields arrive as strings; `v` is empty
/// for gaps in the record.
#[derive(Debug, Deserialize)]
pub struct CoopsObservation {
    /// Timestamp, "YYYY-MM-DD HH:MM" in the requested timezone.
    pub t: String,
    /// Measured value; empty string when missing.
    pub v: String,
    /// Sigma (water level only).
    #[serde(default)]
    pub s: Option<String>,
    /// Data flags.
    #[serde(default)]
    pub f: Option<String>,
    /// Quality level (water level only).
    #[serde(default)]
    pub q: Option<String>,
}

/// Error body returned with HTTP 200 for bad station ids, oversized
/// ranges, and similar request problems.
#[derive(Debug, Deserialize)]
pub struct CoopsApiError {
    pub message: String,
}

// ============================================================================
// URL construction
// ============================================================================

/// Build a `datagetter` URL for one product over one date range.
///
/// The `datum` parameter is included only for products that use one;
/// the API rejects requests that carry a datum for air pressure.
pub fn build_data_url(station_id: &str, request: &DataRequest) -> String {
    let mut url = format!(
        "{}?begin_date={}&end_date={}&station={}&product={}&units={}&time_zone={}",
        COOPS_BASE_URL,
        request.begin_date,
        request.end_date,
        station_id,
        request.product.api_name(),
        request.units,
        request.time_zone,
    );

    if request.product.uses_datum() {
        if let Some(datum) = &request.datum {
            url.push_str("&datum=");
            url.push_str(datum);
        }
    }

    url.push_str("&format=json&application=");
    url.push_str(APPLICATION);
    url
}

// ============================================================================
// Request validation
// ============================================================================

/// Validate a `YYYYMMDD` date bound before building a URL. The API
/// replies to malformed dates with a generic error body, so catching
/// them locally gives a much clearer failure.
fn validate_date(label: &str, value: &str) -> Result<NaiveDate, CoopsError> {
    if value.len() != 8 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoopsError::InvalidRequest(format!(
            "{} '{}' is not in YYYYMMDD form",
            label, value
        )));
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").map_err(|_| {
        CoopsError::InvalidRequest(format!("{} '{}' is not a real calendar date", label, value))
    })
}

fn validate_request(request: &DataRequest) -> Result<(), CoopsError> {
    let begin = validate_date("begin_date", &request.begin_date)?;
    let end = validate_date("end_date", &request.end_date)?;
    if begin > end {
        return Err(CoopsError::InvalidRequest(format!(
            "begin_date {} is after end_date {}",
            request.begin_date, request.end_date
        )));
    }
    if request.product.uses_datum() && request.datum.is_none() {
        return Err(CoopsError::InvalidRequest(
            "water_level requests require a datum".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Fetch the full native-cadence series for one product.
///
/// One blocking GET; any transport, HTTP, or API failure propagates as
/// a `CoopsError` and aborts the caller. No retry is attempted here —
/// the download scripts are single-shot by design.
pub fn fetch_product(
    client: &reqwest::blocking::Client,
    station_id: &str,
    request: &DataRequest,
) -> Result<ObsSeries, CoopsError> {
    validate_request(request)?;

    let url = build_data_url(station_id, request);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| CoopsError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CoopsError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| CoopsError::Request(e.to_string()))?;

    parse_data_response(&body, station_id, request.product)
}

/// Parse a `datagetter` JSON body into an observation series.
///
/// CO-OPS signals request problems with an `error` object inside an
/// HTTP 200 response, so the body must be inspected even on success.
pub fn parse_data_response(
    body: &str,
    station_id: &str,
    product: Product,
) -> Result<ObsSeries, CoopsError> {
    let response: CoopsResponse =
        serde_json::from_str(body).map_err(|e| CoopsError::ParseError(e.to_string()))?;

    if let Some(err) = response.error {
        return Err(CoopsError::ApiError(err.message.trim().to_string()));
    }

    let rows = response
        .data
        .ok_or_else(|| CoopsError::NoData(station_id.to_string()))?;
    if rows.is_empty() {
        return Err(CoopsError::NoData(station_id.to_string()));
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let timestamp = parse_timestamp(&row.t)?;
        // Empty v means a gap in the record; keep the row so the
        // native-cadence export preserves the station's own spacing.
        let value = if row.v.trim().is_empty() {
            None
        } else {
            row.v.trim().parse::<f64>().ok()
        };
        records.push(ObsRecord { timestamp, value });
    }

    Ok(ObsSeries {
        product,
        cadence: Cadence::SixMin,
        records,
    })
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, CoopsError> {
    NaiveDateTime::parse_from_str(raw, COOPS_TIME_FORMAT)
        .map_err(|_| CoopsError::ParseError(format!("unparseable timestamp '{}'", raw)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn water_level_request() -> DataRequest {
        DataRequest {
            begin_date: "20250513".to_string(),
            end_date: "20250719".to_string(),
            product: Product::WaterLevel,
            units: "metric".to_string(),
            datum: Some("MLLW".to_string()),
            time_zone: "lst".to_string(),
        }
    }

    fn air_pressure_request() -> DataRequest {
        DataRequest {
            begin_date: "20250513".to_string(),
            end_date: "20250719".to_string(),
            product: Product::AirPressure,
            units: "metric".to_string(),
            datum: None,
            time_zone: "lst".to_string(),
        }
    }

    // --- URL construction ---------------------------------------------------

    #[test]
    fn test_water_level_url_includes_every_parameter() {
        let url = build_data_url("8761724", &water_level_request());
        assert!(url.starts_with(COOPS_BASE_URL));
        assert!(url.contains("station=8761724"));
        assert!(url.contains("begin_date=20250513"));
        assert!(url.contains("end_date=20250719"));
        assert!(url.contains("product=water_level"));
        assert!(url.contains("units=metric"));
        assert!(url.contains("datum=MLLW"));
        assert!(url.contains("time_zone=lst"));
        assert!(url.contains("format=json"));
    }

    #[test]
    fn test_air_pressure_url_omits_datum() {
        // The API rejects datum on met products, so the builder must
        // drop it even if the caller left one in the bundle.
        let mut request = air_pressure_request();
        request.datum = Some("MLLW".to_string());
        let url = build_data_url("8761724", &request);
        assert!(url.contains("product=air_pressure"));
        assert!(!url.contains("datum="), "datum leaked into met URL: {}", url);
    }

    // --- Validation ---------------------------------------------------------

    #[test]
    fn test_malformed_date_is_rejected_locally() {
        let mut request = water_level_request();
        request.begin_date = "2025-05-13".to_string();
        let err = validate_request(&request).unwrap_err();
        assert!(matches!(err, CoopsError::InvalidRequest(_)), "got {:?}", err);
    }

    #[test]
    fn test_impossible_calendar_date_is_rejected() {
        let mut request = water_level_request();
        request.begin_date = "20250230".to_string();
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_inverted_date_range_is_rejected() {
        let mut request = water_level_request();
        request.begin_date = "20250720".to_string();
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_water_level_without_datum_is_rejected() {
        let mut request = water_level_request();
        request.datum = None;
        assert!(validate_request(&request).is_err());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(validate_request(&water_level_request()).is_ok());
        assert!(validate_request(&air_pressure_request()).is_ok());
    }

    // --- Response parsing ---------------------------------------------------

    const WATER_LEVEL_BODY: &str = r#"{
        "metadata": {"id": "8761724", "name": "Grand Isle", "lat": "29.2633", "lon": "-89.9567"},
        "data": [
            {"t": "2025-05-13 00:00", "v": "0.341", "s": "0.006", "f": "0,0,0,0", "q": "p"},
            {"t": "2025-05-13 00:06", "v": "", "s": "", "f": "0,0,0,1", "q": "p"},
            {"t": "2025-05-13 00:12", "v": "0.352", "s": "0.004", "f": "0,0,0,0", "q": "p"}
        ]
    }"#;

    #[test]
    fn test_parse_water_level_body() {
        let series =
            parse_data_response(WATER_LEVEL_BODY, "8761724", Product::WaterLevel).expect("parse");
        assert_eq!(series.product, Product::WaterLevel);
        assert_eq!(series.cadence, Cadence::SixMin);
        assert_eq!(series.len(), 3);
        assert_eq!(series.records[0].value, Some(0.341));
        assert_eq!(series.records[0].timestamp.hour(), 0);
        assert_eq!(series.records[0].timestamp.minute(), 0);
        assert_eq!(
            series.records[1].value, None,
            "empty v field must become a missing value, not an error"
        );
        assert_eq!(series.records[2].value, Some(0.352));
    }

    #[test]
    fn test_parse_air_pressure_body_without_sigma_fields() {
        let body = r#"{
            "metadata": {"id": "8761724", "name": "Grand Isle", "lat": "29.2633", "lon": "-89.9567"},
            "data": [
                {"t": "2025-05-13 00:00", "v": "1016.2", "f": "0,0,0"},
                {"t": "2025-05-13 00:06", "v": "1016.0", "f": "0,0,0"}
            ]
        }"#;
        let series =
            parse_data_response(body, "8761724", Product::AirPressure).expect("parse");
        assert_eq!(series.len(), 2);
        assert_eq!(series.records[0].value, Some(1016.2));
    }

    #[test]
    fn test_error_body_surfaces_as_api_error() {
        let body = r#"{"error": {"message": " No data was found. This product may not be offered at this station at the requested time."}}"#;
        let err = parse_data_response(body, "9999999", Product::WaterLevel).unwrap_err();
        match err {
            CoopsError::ApiError(msg) => assert!(msg.starts_with("No data was found")),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_data_array_is_no_data() {
        let body = r#"{"metadata": {"id": "8761724", "name": "Grand Isle", "lat": "29.2633", "lon": "-89.9567"}, "data": []}"#;
        let err = parse_data_response(body, "8761724", Product::WaterLevel).unwrap_err();
        assert_eq!(err, CoopsError::NoData("8761724".to_string()));
    }

    #[test]
    fn test_garbage_body_is_parse_error() {
        let err = parse_data_response("<html>503</html>", "8761724", Product::WaterLevel)
            .unwrap_err();
        assert!(matches!(err, CoopsError::ParseError(_)));
    }

    #[test]
    fn test_unparseable_timestamp_is_parse_error() {
        let body = r#"{"data": [{"t": "05/13/2025 00:00", "v": "0.3"}]}"#;
        let err = parse_data_response(body, "8761724", Product::WaterLevel).unwrap_err();
        assert!(matches!(err, CoopsError::ParseError(_)));
    }
}
