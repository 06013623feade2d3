use serde::{Deserialize, Serialize};

use crate::aggregate::ScoreSet;

/// Spacing requirement per turbine: 5 hectares.
const AREA_PER_TURBINE_M2: f64 = 50_000.0;
/// Nameplate capacity of one reference turbine (MW).
const TURBINE_CAPACITY_MW: f64 = 2.5;

/// Wind-farm plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindPlan {
    pub confidence: u8,
    pub turbine_count: u32,
    pub estimated_capacity_mw: f64,
}

impl WindPlan {
    /// Topography only ranks candidate terrain; bankable projects still need
    /// a year of on-site measurements.
    pub fn measurement_note(&self) -> &'static str {
        "A 12-month wind measurement campaign is required before committing"
    }
}

/// Build the wind plan for a site. Sites below one turbine's spacing still
/// plan for a single machine.
pub fn plan_wind(scores: &ScoreSet, area_size_m2: f64) -> WindPlan {
    let turbine_count = ((area_size_m2 / AREA_PER_TURBINE_M2).floor() as u32).max(1);
    WindPlan {
        confidence: scores.wind_energy,
        turbine_count,
        estimated_capacity_mw: f64::from(turbine_count) * TURBINE_CAPACITY_MW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::{EnvironmentalRecord, GeoPoint};

    fn scores() -> ScoreSet {
        let record = EnvironmentalRecord::empty(GeoPoint::new(39.0, 26.8));
        aggregate(&record).scores
    }

    #[test]
    fn test_turbine_count_floors_by_spacing() {
        assert_eq!(plan_wind(&scores(), 250_000.0).turbine_count, 5);
        assert_eq!(plan_wind(&scores(), 249_999.0).turbine_count, 4);
    }

    #[test]
    fn test_small_site_keeps_one_turbine() {
        let p = plan_wind(&scores(), 10_000.0);
        assert_eq!(p.turbine_count, 1);
        assert_eq!(p.estimated_capacity_mw, 2.5);
    }

    #[test]
    fn test_capacity_scales_with_count() {
        let p = plan_wind(&scores(), 500_000.0);
        assert_eq!(p.turbine_count, 10);
        assert_eq!(p.estimated_capacity_mw, 25.0);
    }
}
