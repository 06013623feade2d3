//! Per-category detail planners.
//!
//! Each planner turns an aggregated score set, the environmental record and
//! a requested site area into a structured plan for one land-use category.
//! Planners are pure: every derived quantity is reproducible from the same
//! inputs, and no planner consults another category's planner.

mod agriculture;
mod green_area;
mod residential;
mod solar;
mod wind;

pub use agriculture::{plan_agriculture, AgriculturePlan, Crop};
pub use green_area::{plan_green_area, GreenAreaPlan, SpeciesShare};
pub use residential::{
    plan_residential, GreenSpaceTargets, HousingCapacity, ResidentialPlan, SeismicAssessment,
    SeismicTier, TreeSpecies,
};
pub use solar::{plan_solar, SolarPlan};
pub use wind::{plan_wind, WindPlan};

use serde::{Deserialize, Serialize};

use crate::aggregate::ScoreSet;
use crate::category::LandUse;
use crate::record::EnvironmentalRecord;

/// WHO reference green area per resident, ideal target (m²/person).
pub const WHO_GREEN_AREA_PER_PERSON_M2: f64 = 50.0;
/// WHO reference green area per resident, absolute minimum (m²/person).
pub const WHO_MINIMUM_GREEN_AREA_M2: f64 = 9.0;
/// Annual CO₂ uptake of one mature tree (kg/year).
pub const TREE_CO2_ABSORPTION_KG_YEAR: f64 = 22.0;
/// Canopy footprint of one mature tree (m²).
pub const TREE_CANOPY_M2: f64 = 25.0;
/// Average people per household.
pub const AVERAGE_HOUSEHOLD_SIZE: f64 = 3.5;

/// Irrigation requirement derived from daily precipitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationNeed {
    /// Below 1 mm/day: a dedicated irrigation system is required.
    High,
    /// Seasonal watering suffices.
    Seasonal,
}

impl IrrigationNeed {
    pub(crate) fn from_precipitation(precipitation_mm_day: Option<f64>) -> Self {
        match precipitation_mm_day {
            Some(p) if p < 1.0 => IrrigationNeed::High,
            _ => IrrigationNeed::Seasonal,
        }
    }
}

/// Relative water demand of a crop or tree species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterDemand {
    VeryLow,
    Low,
    Moderate,
    ModerateHigh,
    High,
}

/// Growth speed of a tree species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthRate {
    VerySlow,
    Slow,
    Moderate,
    Fast,
    VeryFast,
}

/// Category-specific planning output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "use_type", rename_all = "snake_case")]
pub enum PlanningDetail {
    Agriculture(AgriculturePlan),
    Residential(Box<ResidentialPlan>),
    GreenArea(GreenAreaPlan),
    SolarEnergy(SolarPlan),
    WindEnergy(WindPlan),
}

/// Run the planner for the given category, if one exists.
///
/// Tourism and geothermal recommendations carry no detail planner; the
/// narrative layer describes them from the scores alone.
pub fn plan_for(
    category: LandUse,
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> Option<PlanningDetail> {
    match category {
        LandUse::Agriculture => Some(PlanningDetail::Agriculture(plan_agriculture(
            scores,
            record,
            area_size_m2,
        ))),
        LandUse::Residential => Some(PlanningDetail::Residential(Box::new(plan_residential(
            scores,
            record,
            area_size_m2,
        )))),
        LandUse::GreenArea => Some(PlanningDetail::GreenArea(plan_green_area(
            scores,
            record,
            area_size_m2,
        ))),
        LandUse::SolarEnergy => Some(PlanningDetail::SolarEnergy(plan_solar(
            scores,
            record,
            area_size_m2,
        ))),
        LandUse::WindEnergy => Some(PlanningDetail::WindEnergy(plan_wind(scores, area_size_m2))),
        LandUse::Tourism | LandUse::Geothermal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::{EnvironmentalRecord, GeoPoint};

    #[test]
    fn test_plan_for_covers_the_five_major_categories() {
        let record = EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0));
        let assessment = aggregate(&record);
        let scores = assessment.scores;

        for category in [
            LandUse::Agriculture,
            LandUse::Residential,
            LandUse::GreenArea,
            LandUse::SolarEnergy,
            LandUse::WindEnergy,
        ] {
            assert!(plan_for(category, &scores, &record, 10_000.0).is_some());
        }
        assert!(plan_for(LandUse::Tourism, &scores, &record, 10_000.0).is_none());
        assert!(plan_for(LandUse::Geothermal, &scores, &record, 10_000.0).is_none());
    }

    #[test]
    fn test_irrigation_need_threshold() {
        assert_eq!(
            IrrigationNeed::from_precipitation(Some(0.9)),
            IrrigationNeed::High
        );
        assert_eq!(
            IrrigationNeed::from_precipitation(Some(1.0)),
            IrrigationNeed::Seasonal
        );
        assert_eq!(
            IrrigationNeed::from_precipitation(None),
            IrrigationNeed::Seasonal
        );
    }
}
