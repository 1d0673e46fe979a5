/// Configuration for the two pipeline drivers.
///
/// Both binaries run with built-in defaults that match the original
/// one-off analysis runs; an optional `baymon.toml` next to the working
/// directory overrides them. Missing file means defaults — the tools
/// stay usable as zero-setup scripts.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Download (Pipeline A)
// ---------------------------------------------------------------------------

/// Parameters for the station data export run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DownloadConfig {
    /// CO-OPS station id to download.
    pub station_id: String,
    /// Inclusive range bounds, YYYYMMDD.
    pub begin_date: String,
    pub end_date: String,
    /// Unit system: "metric" or "english".
    pub units: String,
    /// Vertical datum for water level.
    pub datum: String,
    /// CO-OPS timezone code ("lst", "lst_ldt", "gmt").
    pub time_zone: String,
    /// Directory receiving the CSV files.
    pub output_dir: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig {
            station_id: "8761724".to_string(), // Grand Isle
            begin_date: "20250513".to_string(),
            end_date: "20250719".to_string(),
            units: "metric".to_string(),
            datum: "MLLW".to_string(),
            time_zone: "lst".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution diagnostic (Pipeline B)
// ---------------------------------------------------------------------------

/// Parameters for the mesh resolution diagnostic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolutionConfig {
    /// Path to the mesh-network NetCDF file.
    pub grid_path: String,
    /// Target UTM zone for the planar projection. The default covers
    /// the LPLM domain; grids elsewhere need their own zone.
    pub utm_zone: u8,
    /// Hemisphere of the grid.
    pub northern_hemisphere: bool,
    /// Path of the rendered diagnostic figure.
    pub figure_path: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            grid_path: "LPLM_grid_net.nc".to_string(),
            utm_zone: 15,
            northern_hemisphere: true,
            figure_path: "grid_resolution_map.png".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level file
// ---------------------------------------------------------------------------

/// Contents of `baymon.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub download: DownloadConfig,
    pub resolution: ResolutionConfig,
}

/// Errors from loading a configuration file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from `path`, falling back to defaults when the
/// file does not exist. A file that exists but fails to parse is an
/// error — silently ignoring a typo'd config is worse than aborting.
pub fn load_or_default(path: &Path) -> Result<ToolConfig, ConfigError> {
    if !path.exists() {
        return Ok(ToolConfig::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
