/// Station data export (Pipeline A).
///
/// Downloads water level and air pressure from one CO-OPS tide station
/// over a fixed date range, derives an hourly-mean series from each
/// native 6-minute series, and writes all four CSV files into the
/// output directory. Parameters default to the Grand Isle run and can
/// be overridden via `baymon.toml`.
///
/// Straight-line execution: any failure aborts the run with no retry
/// and no partial-result cleanup.

use std::error::Error;
use std::path::Path;

use baymon_tools::analysis::resample;
use baymon_tools::config;
use baymon_tools::export;
use baymon_tools::ingest::coops::{self, DataRequest};
use baymon_tools::logging::{self, DataSource, LogLevel};
use baymon_tools::model::Product;
use baymon_tools::stations;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logger(LogLevel::Info, None, false);

    let cfg = config::load_or_default(Path::new("baymon.toml"))?.download;
    let station = stations::find_station(&cfg.station_id)
        .ok_or_else(|| format!("station {} is not in the registry", cfg.station_id))?;

    logging::info(
        DataSource::Coops,
        Some(&cfg.station_id),
        &format!(
            "downloading {} {}..{}",
            station.name, cfg.begin_date, cfg.end_date
        ),
    );

    let client = reqwest::blocking::Client::new();
    let output_dir = Path::new(&cfg.output_dir);
    let mut attempted = 0;
    let mut successful = 0;

    for product in [Product::WaterLevel, Product::AirPressure] {
        if !station.expected_products.contains(&product) {
            logging::warn(
                DataSource::Coops,
                Some(&cfg.station_id),
                &format!("skipping {}: not offered at this station", product),
            );
            continue;
        }

        let request = DataRequest {
            begin_date: cfg.begin_date.clone(),
            end_date: cfg.end_date.clone(),
            product,
            units: cfg.units.clone(),
            datum: product.uses_datum().then(|| cfg.datum.clone()),
            time_zone: cfg.time_zone.clone(),
        };

        attempted += 1;
        let native = coops::fetch_product(&client, &cfg.station_id, &request)?;
        let hourly = resample::hourly_mean(&native);

        for series in [&native, &hourly] {
            let filename = export::series_filename(
                station.file_label,
                &cfg.station_id,
                &cfg.begin_date,
                &cfg.end_date,
                product,
                &cfg.units,
                &cfg.time_zone,
                series.cadence,
            );
            let path = output_dir.join(&filename);
            export::write_series_csv(&path, series)?;
            logging::info(
                DataSource::Coops,
                Some(&cfg.station_id),
                &format!("wrote {} rows to {}", series.len(), path.display()),
            );
        }
        successful += 1;
    }

    logging::log_download_summary(&cfg.station_id, attempted, successful, attempted - successful);
    Ok(())
}
