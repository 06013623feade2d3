use serde::{Deserialize, Serialize};

use crate::aggregate::ScoreSet;
use crate::planning::TREE_CO2_ABSORPTION_KG_YEAR;
use crate::record::EnvironmentalRecord;

/// Commodity panel efficiency assumed for yield estimates.
const PANEL_EFFICIENCY: f64 = 0.18;
/// Installed DC capacity per m² of panel area (kW).
const CAPACITY_KW_PER_M2: f64 = 0.15;
/// Share of the site covered by panels after spacing and access roads.
const PANEL_AREA_FRACTION: f64 = 0.7;
/// Fallback daily-average irradiance when the observation is missing (W/m²).
const DEFAULT_SOLAR_RADIATION_WM2: f64 = 200.0;
/// Grid displacement factor (tons CO₂ per MWh).
const CO2_TONS_PER_MWH: f64 = 0.5;
/// Average annual consumption of one household (kWh).
const HOME_CONSUMPTION_KWH_YEAR: f64 = 3600.0;

/// Solar-farm plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPlan {
    pub confidence: u8,
    pub panel_area_m2: f64,
    pub installed_capacity_mw: f64,
    pub annual_production_mwh: f64,
    pub daily_average_kwh: f64,
    pub homes_powered: u32,
    pub co2_avoided_tons_year: f64,
    pub equivalent_trees: u32,
    pub payback_period_years: u8,
}

/// Build the solar plan for a site.
pub fn plan_solar(
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> SolarPlan {
    let radiation = record
        .solar_radiation_wm2
        .unwrap_or(DEFAULT_SOLAR_RADIATION_WM2);
    let panel_area = area_size_m2 * PANEL_AREA_FRACTION;
    let annual_mwh = area_size_m2 * radiation * 365.0 * PANEL_EFFICIENCY / 1000.0 / 1000.0;
    let co2_avoided = (annual_mwh * CO2_TONS_PER_MWH).round();

    SolarPlan {
        confidence: scores.solar_energy,
        panel_area_m2: panel_area,
        installed_capacity_mw: round2(panel_area * CAPACITY_KW_PER_M2 / 1000.0),
        annual_production_mwh: annual_mwh.round(),
        daily_average_kwh: (annual_mwh * 1000.0 / 365.0).round(),
        homes_powered: (annual_mwh * 1000.0 / HOME_CONSUMPTION_KWH_YEAR).round() as u32,
        co2_avoided_tons_year: co2_avoided,
        equivalent_trees: (co2_avoided * 1000.0 / TREE_CO2_ABSORPTION_KG_YEAR).round() as u32,
        payback_period_years: 7,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::GeoPoint;
    use approx::assert_relative_eq;

    fn plan(radiation: Option<f64>, area: f64) -> SolarPlan {
        let mut record = EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0));
        record.solar_radiation_wm2 = radiation;
        let scores = aggregate(&record).scores;
        plan_solar(&scores, &record, area)
    }

    #[test]
    fn test_one_hectare_farm_arithmetic() {
        let p = plan(Some(220.0), 10_000.0);
        assert_eq!(p.panel_area_m2, 7000.0);
        assert_eq!(p.installed_capacity_mw, 1.05);
        // 10_000 * 220 * 365 * 0.18 / 1e6 = 144_540 kWh -> 144.54 MWh -> 145
        assert_eq!(p.annual_production_mwh, 145.0);
        assert_eq!(p.daily_average_kwh, 396.0);
        assert_eq!(p.homes_powered, 40);
        assert_eq!(p.co2_avoided_tons_year, 72.0);
        assert_eq!(p.equivalent_trees, 3273);
        assert_eq!(p.payback_period_years, 7);
    }

    #[test]
    fn test_missing_radiation_uses_planning_default() {
        let p = plan(None, 10_000.0);
        let expected: f64 = 10_000.0 * 200.0 * 365.0 * 0.18 / 1_000_000.0;
        assert_relative_eq!(p.annual_production_mwh, expected.round(), epsilon = 1e-9);
    }

    #[test]
    fn test_capacity_scales_linearly_with_area() {
        let small = plan(Some(200.0), 10_000.0);
        let large = plan(Some(200.0), 20_000.0);
        assert_relative_eq!(
            large.installed_capacity_mw,
            small.installed_capacity_mw * 2.0,
            epsilon = 1e-9
        );
    }
}
