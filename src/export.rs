/// CSV export of station series.
///
/// Output filenames encode everything needed to identify a file at a
/// glance, with fixed `_` separators:
///
///   {station}_ID-{id}_{begin}_{end}_{product}_{units}_{tz}_{cadence}.csv
///
/// Existing files of the same name are overwritten without warning —
/// each run produces fresh artifacts.

use std::path::Path;

use crate::model::{Cadence, ObsSeries, Product};

/// Header of the timestamp column in exported files.
const TIME_COLUMN: &str = "date_time";

/// Timestamp format written to CSV rows.
const CSV_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the output filename for one series.
pub fn series_filename(
    station_name: &str,
    station_id: &str,
    begin_date: &str,
    end_date: &str,
    product: Product,
    units: &str,
    time_zone: &str,
    cadence: Cadence,
) -> String {
    format!(
        "{}_ID-{}_{}_{}_{}_{}_{}_{}.csv",
        station_name,
        station_id,
        begin_date,
        end_date,
        product.api_name(),
        units,
        time_zone,
        cadence.label()
    )
}

/// Serialize a series to a CSV file at `path`.
///
/// Two columns: the timestamp and the product's value column. Missing
/// values become empty fields so gaps survive into the file instead of
/// collapsing the row.
pub fn write_series_csv(path: &Path, series: &ObsSeries) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([TIME_COLUMN, series.product.column_label()])?;

    for record in &series.records {
        let timestamp = record.timestamp.format(CSV_TIME_FORMAT).to_string();
        let value = record.value.map(|v| v.to_string()).unwrap_or_default();
        writer.write_record([timestamp, value])?;
    }

    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObsRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_filename_matches_established_convention() {
        // The downstream analysis scripts glob for this exact pattern;
        // any drift here silently orphans the files.
        let name = series_filename(
            "Grand_Isle",
            "8761724",
            "20250513",
            "20250719",
            Product::WaterLevel,
            "metric",
            "lst",
            Cadence::SixMin,
        );
        assert_eq!(
            name,
            "Grand_Isle_ID-8761724_20250513_20250719_water_level_metric_lst_6min.csv"
        );
    }

    #[test]
    fn test_hourly_air_pressure_filename() {
        let name = series_filename(
            "Grand_Isle",
            "8761724",
            "20250513",
            "20250719",
            Product::AirPressure,
            "metric",
            "lst",
            Cadence::OneHour,
        );
        assert_eq!(
            name,
            "Grand_Isle_ID-8761724_20250513_20250719_air_pressure_metric_lst_1hr.csv"
        );
    }

    #[test]
    fn test_write_series_with_gap() {
        let series = ObsSeries {
            product: Product::WaterLevel,
            cadence: Cadence::OneHour,
            records: vec![
                ObsRecord {
                    timestamp: NaiveDate::from_ymd_opt(2025, 5, 13)
                        .unwrap()
                        .and_hms_opt(0, 0, 0)
                        .unwrap(),
                    value: Some(0.25),
                },
                ObsRecord {
                    timestamp: NaiveDate::from_ymd_opt(2025, 5, 13)
                        .unwrap()
                        .and_hms_opt(1, 0, 0)
                        .unwrap(),
                    value: None,
                },
            ],
        };

        let path = std::env::temp_dir().join("baymon_test_export.csv");
        write_series_csv(&path, &series).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "date_time,water_level");
        assert_eq!(lines[1], "2025-05-13 00:00:00,0.25");
        assert_eq!(
            lines[2], "2025-05-13 01:00:00,",
            "missing value must serialize as an empty field"
        );

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let path = std::env::temp_dir().join("baymon_test_overwrite.csv");
        std::fs::write(&path, "stale contents that should disappear").expect("seed file");

        let series = ObsSeries {
            product: Product::AirPressure,
            cadence: Cadence::SixMin,
            records: vec![ObsRecord {
                timestamp: NaiveDate::from_ymd_opt(2025, 5, 13)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                value: Some(1016.2),
            }],
        };
        write_series_csv(&path, &series).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert!(contents.starts_with("date_time,air"));
        assert!(!contents.contains("stale contents"));

        let _ = std::fs::remove_file(&path);
    }
}
