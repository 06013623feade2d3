//! Environmental observation record consumed by every score function.
//!
//! The record is assembled by the caller from independent upstream sources
//! (vegetation/climate proxy, fire incidence, elevation, soil moisture).
//! Any field may be missing; a missing field contributes nothing to any
//! score and never raises an error.

use serde::{Deserialize, Serialize};

/// Upstream sources mark unavailable numeric readings with this sentinel.
/// Anything at or below it is treated exactly like a missing value.
pub const SENTINEL_INVALID: f64 = -999.0;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

/// Flood-risk label derived from elevation by the upstream elevation source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloodRisk {
    Low,
    Moderate,
    High,
    Unknown,
}

impl FloodRisk {
    /// Classify elevation the way the elevation source does.
    pub fn from_elevation(elevation_m: f64) -> Self {
        if elevation_m < 50.0 {
            FloodRisk::High
        } else if elevation_m < 200.0 {
            FloodRisk::Moderate
        } else {
            FloodRisk::Low
        }
    }
}

/// Qualitative fire-incidence level within the query radius/time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireRiskLevel {
    Low,
    Medium,
    High,
}

impl FireRiskLevel {
    /// Classify an active-fire count the way the fire-incidence source does.
    pub fn from_count(count: u32) -> Self {
        if count > 5 {
            FireRiskLevel::High
        } else if count > 2 {
            FireRiskLevel::Medium
        } else {
            FireRiskLevel::Low
        }
    }
}

/// Qualitative vegetation status for a vegetation index in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VegetationHealth {
    Excellent,
    Good,
    Moderate,
    Weak,
    Poor,
}

impl VegetationHealth {
    pub fn from_index(index: f64) -> Self {
        if index > 0.7 {
            VegetationHealth::Excellent
        } else if index > 0.5 {
            VegetationHealth::Good
        } else if index > 0.3 {
            VegetationHealth::Moderate
        } else if index > 0.2 {
            VegetationHealth::Weak
        } else {
            VegetationHealth::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VegetationHealth::Excellent => "excellent",
            VegetationHealth::Good => "good",
            VegetationHealth::Moderate => "moderate",
            VegetationHealth::Weak => "weak",
            VegetationHealth::Poor => "poor",
        }
    }
}

/// One site's worth of environmental observations.
///
/// Fields are independent: the absence of one never invalidates another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalRecord {
    pub location: GeoPoint,
    /// Vegetation density proxy in [0, 1]; higher = denser vegetation.
    pub vegetation_index: Option<f64>,
    pub precipitation_mm_day: Option<f64>,
    pub solar_radiation_wm2: Option<f64>,
    /// Air temperature in °C; values at or below -999 are sentinel-invalid.
    pub air_temp_c: Option<f64>,
    pub elevation_m: Option<f64>,
    pub flood_risk: Option<FloodRisk>,
    /// Active fires detected within the query radius/time window.
    pub fire_count: u32,
    pub fire_risk: FireRiskLevel,
    /// Root-zone soil moisture in percent [0, 100].
    pub root_zone_moisture_pct: Option<f64>,
    /// Surface soil moisture in percent [0, 100].
    pub surface_moisture_pct: Option<f64>,
}

impl EnvironmentalRecord {
    /// Record with every observation missing. Scoring such a record yields
    /// floor scores rather than an error.
    pub fn empty(location: GeoPoint) -> Self {
        EnvironmentalRecord {
            location,
            vegetation_index: None,
            precipitation_mm_day: None,
            solar_radiation_wm2: None,
            air_temp_c: None,
            elevation_m: None,
            flood_risk: None,
            fire_count: 0,
            fire_risk: FireRiskLevel::Low,
            root_zone_moisture_pct: None,
            surface_moisture_pct: None,
        }
    }

    /// Air temperature with the upstream sentinel filtered out.
    ///
    /// Every consumer goes through this accessor so that `Some(-999.0)` and
    /// `None` are indistinguishable downstream.
    pub fn air_temp(&self) -> Option<f64> {
        self.air_temp_c.filter(|t| *t > SENTINEL_INVALID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_temperature_reads_as_missing() {
        let mut record = EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0));
        record.air_temp_c = Some(-999.0);
        assert_eq!(record.air_temp(), None);

        record.air_temp_c = Some(-1200.0);
        assert_eq!(record.air_temp(), None);

        record.air_temp_c = Some(21.5);
        assert_eq!(record.air_temp(), Some(21.5));
    }

    #[test]
    fn test_flood_risk_from_elevation_breakpoints() {
        assert_eq!(FloodRisk::from_elevation(10.0), FloodRisk::High);
        assert_eq!(FloodRisk::from_elevation(50.0), FloodRisk::Moderate);
        assert_eq!(FloodRisk::from_elevation(199.9), FloodRisk::Moderate);
        assert_eq!(FloodRisk::from_elevation(200.0), FloodRisk::Low);
    }

    #[test]
    fn test_fire_risk_from_count_breakpoints() {
        assert_eq!(FireRiskLevel::from_count(0), FireRiskLevel::Low);
        assert_eq!(FireRiskLevel::from_count(2), FireRiskLevel::Low);
        assert_eq!(FireRiskLevel::from_count(3), FireRiskLevel::Medium);
        assert_eq!(FireRiskLevel::from_count(5), FireRiskLevel::Medium);
        assert_eq!(FireRiskLevel::from_count(6), FireRiskLevel::High);
    }

    #[test]
    fn test_vegetation_health_bands() {
        assert_eq!(
            VegetationHealth::from_index(0.75),
            VegetationHealth::Excellent
        );
        assert_eq!(VegetationHealth::from_index(0.7), VegetationHealth::Good);
        assert_eq!(
            VegetationHealth::from_index(0.31),
            VegetationHealth::Moderate
        );
        assert_eq!(VegetationHealth::from_index(0.21), VegetationHealth::Weak);
        assert_eq!(VegetationHealth::from_index(0.2), VegetationHealth::Poor);
    }
}
