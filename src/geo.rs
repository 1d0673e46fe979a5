/// WGS84 transverse Mercator / UTM projection.
///
/// Converts geographic coordinates to planar easting/northing so that
/// Euclidean distance approximates ground distance inside a zone. Uses
/// the Krüger series in the third flattening n; forward/inverse
/// round-trip error is on the order of 1e-9 degrees over the UTM
/// latitude band, far tighter than this toolkit needs.
///
/// Reference: Karney, C. F. F. (2011), "Transverse Mercator with an
/// accuracy of a few nanometers", Journal of Geodesy 85(8).

use std::fmt;

/// WGS84 semi-major axis, meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// UTM scale factor on the central meridian.
pub const UTM_K0: f64 = 0.9996;
/// UTM false easting, meters.
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere, meters.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum GeoError {
    /// Input coordinate or zone outside the projection's valid domain.
    InvalidInput(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

// ---------------------------------------------------------------------------
// Zone helpers
// ---------------------------------------------------------------------------

/// UTM zone containing a longitude. Clamped to 1..=60 at the antimeridian.
pub fn auto_utm_zone(lon: f64) -> u8 {
    let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
    zone.clamp(1, 60) as u8
}

/// Central meridian of a UTM zone, degrees.
pub fn utm_central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

fn check_zone(zone: u8) -> Result<(), GeoError> {
    if !(1..=60).contains(&zone) {
        return Err(GeoError::InvalidInput(format!(
            "UTM zone {} out of range (1-60)",
            zone
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Series coefficients
// ---------------------------------------------------------------------------

/// Precomputed Krüger-series terms for WGS84.
struct Kruger {
    /// Rectifying radius A.
    a_cap: f64,
    /// Forward series coefficients.
    alpha: [f64; 3],
    /// Inverse series coefficients.
    beta: [f64; 3],
    /// Footpoint-latitude series coefficients.
    delta: [f64; 3],
    /// 2*sqrt(n)/(1+n), used in the conformal latitude.
    conformal_k: f64,
}

impl Kruger {
    fn wgs84() -> Self {
        let n = WGS84_F / (2.0 - WGS84_F);
        let n2 = n * n;
        let n3 = n2 * n;
        Kruger {
            a_cap: WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0),
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
                61.0 * n3 / 240.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
                n2 / 48.0 + n3 / 15.0,
                17.0 * n3 / 480.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
                56.0 * n3 / 15.0,
            ],
            conformal_k: 2.0 * n.sqrt() / (1.0 + n),
        }
    }
}

// ---------------------------------------------------------------------------
// Forward / inverse projection
// ---------------------------------------------------------------------------

/// Geographic coordinates to UTM easting/northing, meters.
///
/// Pure and deterministic. The caller is responsible for choosing a
/// zone that actually contains the data — points far outside the zone
/// project without error but with distorted distances.
pub fn geographic_to_utm(
    lon: f64,
    lat: f64,
    zone: u8,
    north: bool,
) -> Result<(f64, f64), GeoError> {
    check_zone(zone)?;
    if !(-80.0..=84.0).contains(&lat) {
        return Err(GeoError::InvalidInput(format!(
            "Latitude {} out of UTM range (-80, 84)",
            lat
        )));
    }

    let k = Kruger::wgs84();
    let phi = lat.to_radians();
    let dlon = (lon - utm_central_meridian(zone)).to_radians();

    // Conformal latitude.
    let sin_phi = phi.sin();
    let t = (sin_phi.atanh() - k.conformal_k * (k.conformal_k * sin_phi).atanh()).sinh();

    let xi_p = t.atan2(dlon.cos());
    let eta_p = (dlon.sin() / (1.0 + t * t).sqrt()).asinh();

    let mut xi = xi_p;
    let mut eta = eta_p;
    for (j, a) in k.alpha.iter().enumerate() {
        let w = 2.0 * (j as f64 + 1.0);
        xi += a * (w * xi_p).sin() * (w * eta_p).cosh();
        eta += a * (w * xi_p).cos() * (w * eta_p).sinh();
    }

    let easting = FALSE_EASTING + UTM_K0 * k.a_cap * eta;
    let mut northing = UTM_K0 * k.a_cap * xi;
    if !north {
        northing += FALSE_NORTHING_SOUTH;
    }
    Ok((easting, northing))
}

/// UTM easting/northing back to geographic (longitude, latitude),
/// degrees. Inverse of [`geographic_to_utm`] for the same zone and
/// hemisphere.
pub fn utm_to_geographic(
    easting: f64,
    northing: f64,
    zone: u8,
    north: bool,
) -> Result<(f64, f64), GeoError> {
    check_zone(zone)?;

    let k = Kruger::wgs84();
    let y = if north {
        northing
    } else {
        northing - FALSE_NORTHING_SOUTH
    };
    let xi = y / (UTM_K0 * k.a_cap);
    let eta = (easting - FALSE_EASTING) / (UTM_K0 * k.a_cap);

    let mut xi_p = xi;
    let mut eta_p = eta;
    for (j, b) in k.beta.iter().enumerate() {
        let w = 2.0 * (j as f64 + 1.0);
        xi_p -= b * (w * xi).sin() * (w * eta).cosh();
        eta_p -= b * (w * xi).cos() * (w * eta).sinh();
    }

    let chi = (xi_p.sin() / eta_p.cosh()).asin();
    let mut phi = chi;
    for (j, d) in k.delta.iter().enumerate() {
        let w = 2.0 * (j as f64 + 1.0);
        phi += d * (w * chi).sin();
    }

    let lon = utm_central_meridian(zone) + eta_p.sinh().atan2(xi_p.cos()).to_degrees();
    Ok((lon, phi.to_degrees()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
