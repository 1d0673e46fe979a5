/// Station registry for the Louisiana coast observation toolkit.
///
/// Defines the canonical list of NOAA CO-OPS tide stations this toolkit
/// downloads from, along with their metadata. This is the single source
/// of truth for station ids — the download driver and tests reference
/// stations from here rather than hardcoding ids.

use crate::model::Product;

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Metadata for a single CO-OPS tide station.
pub struct Station {
    /// 7-digit NOAA CO-OPS station id.
    pub station_id: &'static str,
    /// Official CO-OPS station name.
    pub name: &'static str,
    /// Underscore-joined name used in output filenames.
    pub file_label: &'static str,
    /// Human-readable description of the station's role in the analysis.
    pub description: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Which products this station is expected to serve. Some stations
    /// carry a water-level sensor only, or a met package only.
    pub expected_products: &'static [Product],
}

/// All CO-OPS stations used in the Barataria Bay / Pontchartrain work,
/// ordered roughly from the study site outward.
///
/// Sources:
///   - Station ids and positions: CO-OPS station catalog
///     (tidesandcurrents.noaa.gov)
pub static STATION_REGISTRY: &[Station] = &[
    Station {
        station_id: "8761724",
        name: "Grand Isle, LA",
        file_label: "Grand_Isle",
        description: "Primary reference gauge for Barataria Bay. Water \
                      level and full meteorological package.",
        latitude: 29.2633,
        longitude: -89.9567,
        expected_products: &[Product::WaterLevel, Product::AirPressure],
    },
    Station {
        station_id: "8761305",
        name: "Shell Beach, LA",
        file_label: "Shell_Beach",
        description: "Eastern marsh gauge on Lake Borgne. Useful for \
                      cross-checking surge propagation into the estuary.",
        latitude: 29.8683,
        longitude: -89.6733,
        expected_products: &[Product::WaterLevel, Product::AirPressure],
    },
    Station {
        station_id: "8761927",
        name: "New Canal Station, LA",
        file_label: "New_Canal_Station",
        description: "South shore of Lake Pontchartrain. Closest gauge to \
                      the LPLM model domain interior.",
        latitude: 30.0272,
        longitude: -90.1134,
        expected_products: &[Product::WaterLevel, Product::AirPressure],
    },
    Station {
        station_id: "8760922",
        name: "Pilots Station East, S.W. Pass, LA",
        file_label: "Pilots_Station_East",
        description: "Mississippi River mouth. Offshore boundary \
                      reference for the delta-front model runs.",
        latitude: 28.9322,
        longitude: -89.4075,
        expected_products: &[Product::WaterLevel, Product::AirPressure],
    },
    Station {
        station_id: "8762075",
        name: "Port Fourchon, Belle Pass, LA",
        file_label: "Port_Fourchon",
        description: "Western Barataria boundary gauge. Water level only; \
                      the met package was removed in 2022.",
        latitude: 29.1142,
        longitude: -90.1992,
        expected_products: &[Product::WaterLevel],
    },
];

/// Returns the station ids for all registered stations.
pub fn all_station_ids() -> Vec<&'static str> {
    STATION_REGISTRY.iter().map(|s| s.station_id).collect()
}

/// Returns station ids expected to serve a specific product.
pub fn stations_with_product(product: Product) -> Vec<&'static str> {
    STATION_REGISTRY
        .iter()
        .filter(|s| s.expected_products.contains(&product))
        .map(|s| s.station_id)
        .collect()
}

/// Checks whether a station is expected to serve a product.
pub fn station_has_product(station_id: &str, product: Product) -> bool {
    find_station(station_id)
        .map(|s| s.expected_products.contains(&product))
        .unwrap_or(false)
}

/// Looks up a station by id. Returns `None` if not found.
pub fn find_station(station_id: &str) -> Option<&'static Station> {
    STATION_REGISTRY.iter().find(|s| s.station_id == station_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
