/// Unstructured-grid NetCDF input.
///
/// Loads the per-edge coordinate arrays from a mesh-network file
/// written by the Delft3D FM suite (`*_net.nc`). Edge midpoints stand
/// in for local grid density in the resolution diagnostic.

use std::fmt;
use std::path::Path;

/// Variable name for edge-midpoint longitudes in a mesh-network file.
pub const EDGE_X_VAR: &str = "mesh2d_edge_x";
/// Variable name for edge-midpoint latitudes.
pub const EDGE_Y_VAR: &str = "mesh2d_edge_y";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parallel per-edge coordinate arrays in geographic degrees, narrowed
/// to single precision as the source arrays are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCoordinates {
    /// Longitudes, one per mesh edge.
    pub lon: Vec<f32>,
    /// Latitudes, one per mesh edge.
    pub lat: Vec<f32>,
}

impl EdgeCoordinates {
    pub fn len(&self) -> usize {
        self.lon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lon.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can arise when loading a mesh-network dataset.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The file is missing or unreadable.
    Io(String),
    /// The NetCDF library rejected the file or a read.
    NetCdf(String),
    /// The file opened but lacks an expected variable.
    MissingVariable(String),
    /// The file's contents are inconsistent (mismatched array lengths).
    InvalidGrid(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Io(msg) => write!(f, "I/O error: {}", msg),
            GridError::NetCdf(msg) => write!(f, "NetCDF error: {}", msg),
            GridError::MissingVariable(name) => write!(f, "Missing variable: {}", name),
            GridError::InvalidGrid(msg) => write!(f, "Invalid grid: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<netcdf::Error> for GridError {
    fn from(e: netcdf::Error) -> Self {
        GridError::NetCdf(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Open a mesh-network dataset and extract the edge coordinate arrays.
///
/// Fails if the file is missing, is not a readable NetCDF dataset, or
/// lacks either expected variable. Values are narrowed to `f32`
/// regardless of the on-disk type.
pub fn load_edge_coordinates(path: &Path) -> Result<EdgeCoordinates, GridError> {
    if !path.exists() {
        return Err(GridError::Io(format!(
            "grid file not found: {}",
            path.display()
        )));
    }

    let file = netcdf::open(path)?;
    let lon = read_edge_var(&file, EDGE_X_VAR)?;
    let lat = read_edge_var(&file, EDGE_Y_VAR)?;

    if lon.len() != lat.len() {
        return Err(GridError::InvalidGrid(format!(
            "{} has {} values but {} has {}",
            EDGE_X_VAR,
            lon.len(),
            EDGE_Y_VAR,
            lat.len()
        )));
    }

    Ok(EdgeCoordinates { lon, lat })
}

fn read_edge_var(file: &netcdf::File, name: &str) -> Result<Vec<f32>, GridError> {
    let var = file
        .variable(name)
        .ok_or_else(|| GridError::MissingVariable(name.to_string()))?;
    let values: Vec<f32> = var.get_values(..)?;
    Ok(values)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
