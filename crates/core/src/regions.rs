//! Named geographic rectangles for coastal, high-wind and geothermal zones.
//!
//! These are deliberate heuristic approximations of Turkish coastlines and
//! known geothermal fields, kept as literal constant tables so the bounds
//! are easy to audit and extend per region.

use crate::record::GeoPoint;

/// Axis-aligned lat/lon rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
    pub name: &'static str,
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoRect {
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}

/// Approximate coastal strips, one per sea.
pub const COASTAL_ZONES: [GeoRect; 4] = [
    GeoRect {
        name: "Mediterranean coast",
        min_lat: 36.0,
        max_lat: 37.5,
        min_lon: 27.0,
        max_lon: 36.5,
    },
    GeoRect {
        name: "Aegean coast",
        min_lat: 36.5,
        max_lat: 40.5,
        min_lon: 26.0,
        max_lon: 28.5,
    },
    GeoRect {
        name: "Black Sea coast",
        min_lat: 40.5,
        max_lat: 42.0,
        min_lon: 27.0,
        max_lon: 42.0,
    },
    GeoRect {
        name: "Marmara coast",
        min_lat: 40.0,
        max_lat: 41.5,
        min_lon: 26.0,
        max_lon: 30.0,
    },
];

/// Coastal sub-regions with persistently strong winds and their score bonus.
/// Checked in order; the first match wins.
pub const HIGH_WIND_CORRIDORS: [(GeoRect, i32); 2] = [
    (
        // Etesian winds, Canakkale-Balikesir coasts
        GeoRect {
            name: "North Aegean corridor",
            min_lat: 38.5,
            max_lat: 40.5,
            min_lon: 26.0,
            max_lon: 27.5,
        },
        15,
    ),
    (
        // Mersin-Adana coasts
        GeoRect {
            name: "Eastern Mediterranean corridor",
            min_lat: 36.0,
            max_lat: 37.0,
            min_lon: 32.0,
            max_lon: 36.5,
        },
        10,
    ),
];

/// Known geothermal fields and their score bonus. Checked in order; the
/// first match wins. Membership is what makes a site "high potential" -
/// outside these rectangles geothermal scoring stays near its baseline.
pub const GEOTHERMAL_FIELDS: [(GeoRect, i32); 4] = [
    (
        GeoRect {
            name: "Denizli-Aydin graben",
            min_lat: 37.5,
            max_lat: 38.5,
            min_lon: 27.5,
            max_lon: 29.5,
        },
        35,
    ),
    (
        GeoRect {
            name: "Afyonkarahisar fields",
            min_lat: 38.5,
            max_lat: 39.0,
            min_lon: 30.0,
            max_lon: 31.0,
        },
        30,
    ),
    (
        GeoRect {
            name: "Kutahya-Simav fields",
            min_lat: 39.0,
            max_lat: 39.5,
            min_lon: 28.5,
            max_lon: 29.5,
        },
        25,
    ),
    (
        GeoRect {
            name: "Izmir Balcova-Seferihisar",
            min_lat: 38.2,
            max_lat: 38.8,
            min_lon: 26.8,
            max_lon: 27.5,
        },
        20,
    ),
];

/// Whether the point lies inside any approximate coastal strip.
pub fn is_coastal(point: GeoPoint) -> bool {
    COASTAL_ZONES.iter().any(|zone| zone.contains(point))
}

/// First matching high-wind corridor, if any.
pub fn wind_corridor(point: GeoPoint) -> Option<&'static (GeoRect, i32)> {
    HIGH_WIND_CORRIDORS.iter().find(|(rect, _)| rect.contains(point))
}

/// First matching geothermal field, if any.
pub fn geothermal_field(point: GeoPoint) -> Option<&'static (GeoRect, i32)> {
    GEOTHERMAL_FIELDS.iter().find(|(rect, _)| rect.contains(point))
}
