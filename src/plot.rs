/// Resolution diagnostic figure.
///
/// Draws one line segment from every projected edge point to its
/// nearest neighbor, colored by separation distance on a linear scale
/// normalized to [min, max], with a colorbar legend. The figure exists
/// for visual sanity-checking only — clusters of short, dark segments
/// mark refined regions; long ones flag mesh gaps or projection
/// mistakes.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use crate::analysis::resolution::NearestNeighborSet;

/// Figure dimensions in pixels.
const FIGURE_SIZE: (u32, u32) = (1000, 620);
/// Width of the map panel; the remainder holds the colorbar.
const MAP_PANEL_WIDTH: u32 = 860;
/// Number of bands used to draw the colorbar gradient.
const COLORBAR_BANDS: usize = 128;

/// Render the nearest-neighbor connectivity figure to a PNG file.
///
/// `coords` are the projected planar points (meters); `neighbors` is
/// the matching nearest-neighbor set. Writes over any existing file at
/// `path`.
pub fn render_resolution_map(
    coords: &[[f64; 2]],
    neighbors: &NearestNeighborSet,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    if neighbors.pairs.is_empty() {
        return Err("nothing to plot: nearest-neighbor set is empty".into());
    }

    let (x_range, y_range) = padded_extent(coords);
    let (d_min, d_max) = distance_range(neighbors);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (map_area, bar_area) = root.split_horizontally(MAP_PANEL_WIDTH);

    // Map panel: one segment per point.
    let mut chart = ChartBuilder::on(&map_area)
        .margin(10)
        .caption("Nearest-neighbor spacing", ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc("Easting (m)")
        .y_desc("Northing (m)")
        .draw()?;

    chart.draw_series(neighbors.pairs.iter().map(|pair| {
        let a = coords[pair.index];
        let b = coords[pair.neighbor];
        let color = distance_color(pair.distance, d_min, d_max);
        PathElement::new(vec![(a[0], a[1]), (b[0], b[1])], color.stroke_width(1))
    }))?;

    // Colorbar panel.
    let mut bar = ChartBuilder::on(&bar_area)
        .margin(10)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..1.0, d_min..d_max)?;

    bar.configure_mesh()
        .disable_x_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_desc("Distance (m)")
        .draw()?;

    let band_height = (d_max - d_min) / COLORBAR_BANDS as f64;
    bar.draw_series((0..COLORBAR_BANDS).map(|i| {
        let lo = d_min + band_height * i as f64;
        let mid = lo + band_height / 2.0;
        Rectangle::new(
            [(0.0, lo), (1.0, lo + band_height)],
            distance_color(mid, d_min, d_max).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Map a distance onto the Viridis ramp normalized to [d_min, d_max].
fn distance_color(distance: f64, d_min: f64, d_max: f64) -> RGBColor {
    let span = d_max - d_min;
    let t = if span > 0.0 {
        ((distance - d_min) / span).clamp(0.0, 1.0)
    } else {
        0.5
    };
    ViridisRGB.get_color(t as f32)
}

/// Axis extents with a 2% margin; degenerate extents get a 1 m pad so
/// the chart always has a nonzero range.
fn padded_extent(coords: &[[f64; 2]]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in coords {
        x_min = x_min.min(p[0]);
        x_max = x_max.max(p[0]);
        y_min = y_min.min(p[1]);
        y_max = y_max.max(p[1]);
    }

    let x_pad = ((x_max - x_min) * 0.02).max(1.0);
    let y_pad = ((y_max - y_min) * 0.02).max(1.0);
    ((x_min - x_pad, x_max + x_pad), (y_min - y_pad, y_max + y_pad))
}

/// Distance normalization bounds; a constant-distance set gets a 1 m
/// spread so the colorbar range stays valid.
fn distance_range(neighbors: &NearestNeighborSet) -> (f64, f64) {
    let mut d_min = f64::INFINITY;
    let mut d_max = f64::NEG_INFINITY;
    for pair in &neighbors.pairs {
        d_min = d_min.min(pair.distance);
        d_max = d_max.max(pair.distance);
    }
    if d_max <= d_min {
        d_max = d_min + 1.0;
    }
    (d_min, d_max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
