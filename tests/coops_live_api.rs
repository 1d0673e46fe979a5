/// Live integration tests against the NOAA CO-OPS datagetter API
///
/// These tests verify:
/// 1. The API returns 6-minute water level data for a registered station
/// 2. The API returns 6-minute air pressure data for a registered station
/// 3. A bogus station id surfaces the API's error payload as ApiError
/// 4. The downloaded series survives hourly resampling and CSV export
///
/// Prerequisites:
/// - Internet connectivity to api.tidesandcurrents.noaa.gov
///
/// All tests are #[ignore]d because they make real API calls and may be
/// slow, rate-limited, or affected by station outages.
///
/// Run with: cargo test --test coops_live_api -- --ignored

use baymon_tools::analysis::resample;
use baymon_tools::export;
use baymon_tools::ingest::coops::{self, DataRequest};
use baymon_tools::model::{Cadence, CoopsError, Product};
use baymon_tools::stations;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn live_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
}

/// A short, safely historical window keeps the payload small and the
/// data guaranteed to exist.
fn short_window(product: Product) -> DataRequest {
    DataRequest {
        begin_date: "20250513".to_string(),
        end_date: "20250514".to_string(),
        product,
        units: "metric".to_string(),
        datum: product.uses_datum().then(|| "MLLW".to_string()),
        time_zone: "lst".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Data Availability Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_grand_isle_water_level_is_available() {
    let station = stations::find_station("8761724").expect("Grand Isle in registry");
    let request = short_window(Product::WaterLevel);

    let series = coops::fetch_product(&live_client(), station.station_id, &request)
        .expect("CO-OPS water level request failed - check network connectivity");

    println!(
        "✓ CO-OPS returned {} water level records for {}",
        series.len(),
        station.name
    );
    assert!(!series.is_empty(), "Should receive at least one record");
    assert_eq!(series.product, Product::WaterLevel);
    assert_eq!(series.cadence, Cadence::SixMin);

    // Two full days at 6-minute cadence is at most 480 records.
    assert!(
        series.len() <= 480,
        "Unexpected record count {} for a two-day window",
        series.len()
    );

    // Records must come back in chronological order.
    for pair in series.records.windows(2) {
        assert!(
            pair[0].timestamp < pair[1].timestamp,
            "Timestamps out of order: {} then {}",
            pair[0].timestamp,
            pair[1].timestamp
        );
    }
}

#[test]
#[ignore]
fn test_grand_isle_air_pressure_is_available() {
    let request = short_window(Product::AirPressure);

    let series = coops::fetch_product(&live_client(), "8761724", &request)
        .expect("CO-OPS air pressure request failed - check network connectivity");

    println!("✓ CO-OPS returned {} air pressure records", series.len());
    assert!(!series.is_empty(), "Should receive at least one record");

    // Sea-level pressure in millibars; anything outside this band means
    // we parsed the wrong field.
    for record in series.records.iter().filter_map(|r| r.value) {
        assert!(
            (850.0..=1100.0).contains(&record),
            "Implausible air pressure value: {}",
            record
        );
    }
}

#[test]
#[ignore]
fn test_unknown_station_returns_api_error() {
    let request = short_window(Product::WaterLevel);

    let result = coops::fetch_product(&live_client(), "0000000", &request);

    match result {
        Err(CoopsError::ApiError(message)) => {
            println!("✓ CO-OPS rejected bogus station: {}", message);
        }
        Err(CoopsError::NoData(message)) => {
            // Some error shapes come back as an empty data array instead.
            println!("✓ CO-OPS returned no data for bogus station: {}", message);
        }
        other => panic!("Expected an API error for a bogus station, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// End-to-End Pipeline Test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn test_full_pipeline_fetch_resample_export() {
    // Full pipeline: fetch → resample → export → read back
    let station = stations::find_station("8761724").expect("Grand Isle in registry");
    let request = short_window(Product::WaterLevel);

    let native = coops::fetch_product(&live_client(), station.station_id, &request)
        .expect("CO-OPS request failed");
    let hourly = resample::hourly_mean(&native);

    println!(
        "✓ Resampled {} native records into {} hourly rows",
        native.len(),
        hourly.len()
    );
    assert!(!hourly.is_empty());
    assert!(hourly.len() < native.len());

    let filename = export::series_filename(
        station.file_label,
        station.station_id,
        &request.begin_date,
        &request.end_date,
        request.product,
        &request.units,
        &request.time_zone,
        hourly.cadence,
    );
    let path = std::env::temp_dir().join(&filename);
    export::write_series_csv(&path, &hourly).expect("CSV export failed");

    let contents = std::fs::read_to_string(&path).expect("Failed to read exported CSV");
    let line_count = contents.lines().count();
    assert_eq!(
        line_count,
        hourly.len() + 1,
        "CSV should hold one header plus one row per hour"
    );
    assert!(contents.starts_with("date_time,water_level"));

    println!("✓ Exported {} rows to {}", hourly.len(), path.display());

    let _ = std::fs::remove_file(&path);
}
