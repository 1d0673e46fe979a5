/// Mesh resolution diagnostic (Pipeline B).
///
/// Loads edge-midpoint coordinates from an unstructured-grid NetCDF
/// file, projects them to UTM so Euclidean distance approximates
/// ground distance, finds each point's nearest-neighbor distance,
/// prints summary statistics, and renders the connectivity figure.
///
/// Grid path, UTM zone, and figure path default to the LPLM run and
/// can be overridden via `baymon.toml`.

use std::error::Error;
use std::path::Path;

use baymon_tools::analysis::resolution;
use baymon_tools::analysis::stats;
use baymon_tools::config;
use baymon_tools::geo;
use baymon_tools::logging::{self, DataSource, LogLevel};
use baymon_tools::mesh;
use baymon_tools::plot;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logger(LogLevel::Info, None, false);

    let cfg = config::load_or_default(Path::new("baymon.toml"))?.resolution;

    let grid = mesh::load_edge_coordinates(Path::new(&cfg.grid_path))?;
    logging::info(
        DataSource::Grid,
        None,
        &format!("loaded {} edge points from {}", grid.len(), cfg.grid_path),
    );

    let mut coords = Vec::with_capacity(grid.len());
    for (lon, lat) in grid.lon.iter().zip(grid.lat.iter()) {
        let (x, y) = geo::geographic_to_utm(
            f64::from(*lon),
            f64::from(*lat),
            cfg.utm_zone,
            cfg.northern_hemisphere,
        )?;
        coords.push([x, y]);
    }

    let neighbors = resolution::nearest_neighbors(&coords);
    if neighbors.coincident_count > 0 {
        logging::warn(
            DataSource::Grid,
            None,
            &format!(
                "{} points share coordinates with another point; their nearest-neighbor distance is 0",
                neighbors.coincident_count
            ),
        );
    }

    let distances = neighbors.distances();
    let summary = stats::describe(&distances)
        .ok_or("grid has fewer than two edge points; resolution is undefined")?;
    println!("{}", stats::resolution_report(&summary));

    plot::render_resolution_map(&coords, &neighbors, Path::new(&cfg.figure_path))?;
    logging::info(
        DataSource::Grid,
        None,
        &format!("wrote diagnostic figure to {}", cfg.figure_path),
    );

    Ok(())
}
