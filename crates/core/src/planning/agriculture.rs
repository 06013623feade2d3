use serde::Serialize;

use crate::aggregate::ScoreSet;
use crate::planning::{IrrigationNeed, WaterDemand};
use crate::record::EnvironmentalRecord;

/// Yield in kg per decare (1000 m²), the customary farm unit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Crop {
    pub name: &'static str,
    pub yield_min_kg_decare: u32,
    pub yield_max_kg_decare: u32,
    pub season: &'static str,
    pub water: WaterDemand,
}

const fn crop(
    name: &'static str,
    yield_min_kg_decare: u32,
    yield_max_kg_decare: u32,
    season: &'static str,
    water: WaterDemand,
) -> Crop {
    Crop {
        name,
        yield_min_kg_decare,
        yield_max_kg_decare,
        season,
        water,
    }
}

// Crop tables by climate bucket. Hot/temperate climates split further on
// rainfall; a high-altitude site overrides the whole selection.

const HOT_WET_CROPS: [Crop; 4] = [
    crop("Corn", 800, 1000, "April-September", WaterDemand::High),
    crop("Cotton", 400, 500, "April-October", WaterDemand::ModerateHigh),
    crop("Watermelon", 4000, 6000, "May-August", WaterDemand::High),
    crop("Tomato (greenhouse)", 8000, 10000, "Year-round", WaterDemand::High),
];

const HOT_DRY_CROPS: [Crop; 4] = [
    crop("Sunflower", 250, 350, "March-August", WaterDemand::Low),
    crop("Sesame", 80, 120, "May-September", WaterDemand::Low),
    crop("Chickpea", 200, 300, "November-July", WaterDemand::Low),
    crop("Melon (drip-irrigated)", 3000, 4000, "May-August", WaterDemand::Moderate),
];

const TEMPERATE_WET_CROPS: [Crop; 5] = [
    crop("Wheat", 400, 600, "October-July", WaterDemand::Moderate),
    crop("Sugar beet", 5000, 7000, "March-October", WaterDemand::High),
    crop("Tomato (open field)", 5000, 7000, "May-September", WaterDemand::High),
    crop("Pepper", 3000, 4000, "May-October", WaterDemand::ModerateHigh),
    crop("Green beans", 250, 350, "May-September", WaterDemand::Moderate),
];

const TEMPERATE_DRY_CROPS: [Crop; 4] = [
    crop("Wheat (dryland)", 250, 350, "October-July", WaterDemand::Low),
    crop("Barley", 300, 400, "October-June", WaterDemand::Low),
    crop("Lentil", 150, 250, "November-July", WaterDemand::Low),
    crop("Chickpea", 200, 300, "November-July", WaterDemand::Low),
];

const COOL_CROPS: [Crop; 5] = [
    crop("Wheat", 350, 500, "October-July", WaterDemand::Moderate),
    crop("Barley", 300, 450, "October-June", WaterDemand::Moderate),
    crop("Potato", 2500, 4000, "March-September", WaterDemand::ModerateHigh),
    crop("Onion", 3000, 5000, "February-August", WaterDemand::Moderate),
    crop("Carrot", 2500, 3500, "March-October", WaterDemand::Moderate),
];

const COLD_CROPS: [Crop; 5] = [
    crop("Barley", 250, 400, "October-June", WaterDemand::Low),
    crop("Rye", 200, 350, "October-July", WaterDemand::Low),
    crop("Oats", 250, 400, "March-July", WaterDemand::Moderate),
    crop("Cabbage", 3000, 5000, "July-November", WaterDemand::Moderate),
    crop("Turnip", 2000, 3000, "August-November", WaterDemand::Moderate),
];

const HIGHLAND_CROPS: [Crop; 4] = [
    crop("Barley (highland)", 200, 300, "October-July", WaterDemand::Low),
    crop("Rye", 180, 280, "October-July", WaterDemand::Low),
    crop("Potato (mountain)", 2000, 3000, "April-September", WaterDemand::Moderate),
    crop("Alfalfa (fodder)", 800, 1200, "March-October", WaterDemand::Moderate),
];

/// Simplified whole-site yield constant: 4 kg per m² per year.
const YIELD_KG_PER_M2_YEAR: f64 = 4.0;

/// Agricultural development plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgriculturePlan {
    pub confidence: u8,
    /// Crops suited to the site's climate bucket; empty when temperature
    /// data is missing.
    pub recommended_crops: Vec<Crop>,
    pub estimated_yield_kg_year: f64,
    pub irrigation: IrrigationNeed,
    pub climate_notes: Vec<String>,
    pub challenges: Vec<String>,
}

/// Build the agricultural plan for a site.
pub fn plan_agriculture(
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> AgriculturePlan {
    AgriculturePlan {
        confidence: scores.agriculture,
        recommended_crops: select_crops(record),
        estimated_yield_kg_year: area_size_m2 * YIELD_KG_PER_M2_YEAR,
        irrigation: IrrigationNeed::from_precipitation(record.precipitation_mm_day),
        climate_notes: climate_notes(record),
        challenges: challenges(record),
    }
}

/// Pick the crop table from nested temperature/rainfall buckets, with a
/// full override above 1500m.
fn select_crops(record: &EnvironmentalRecord) -> Vec<Crop> {
    let Some(temp) = record.air_temp() else {
        return Vec::new();
    };
    let precipitation = record.precipitation_mm_day.unwrap_or(2.0);

    if record.elevation_m.is_some_and(|e| e > 1500.0) {
        return HIGHLAND_CROPS.to_vec();
    }

    let table: &[Crop] = if temp >= 25.0 {
        if precipitation > 2.0 {
            &HOT_WET_CROPS
        } else {
            &HOT_DRY_CROPS
        }
    } else if temp >= 20.0 {
        if precipitation > 2.0 {
            &TEMPERATE_WET_CROPS
        } else {
            &TEMPERATE_DRY_CROPS
        }
    } else if temp >= 15.0 {
        &COOL_CROPS
    } else {
        &COLD_CROPS
    };
    table.to_vec()
}

fn climate_notes(record: &EnvironmentalRecord) -> Vec<String> {
    let Some(temp) = record.air_temp() else {
        return vec!["Temperature data unavailable for this site".to_string()];
    };
    let precipitation = record.precipitation_mm_day.unwrap_or(2.0);

    let mut notes = Vec::new();
    if (15.0..=30.0).contains(&temp) {
        notes.push(format!("Temperature in the optimal range ({temp:.1}\u{b0}C)"));
    } else if temp > 30.0 {
        notes.push(format!(
            "High temperatures ({temp:.1}\u{b0}C), choose heat-tolerant varieties"
        ));
    } else {
        notes.push(format!(
            "Low temperatures ({temp:.1}\u{b0}C), choose cold-hardy varieties"
        ));
    }

    if precipitation > 2.5 {
        notes.push(format!("Rainfall is adequate ({precipitation:.1} mm/day)"));
    } else if precipitation > 1.5 {
        notes.push(format!(
            "Moderate rainfall ({precipitation:.1} mm/day), plan for drought years"
        ));
    } else {
        notes.push(format!(
            "Insufficient rainfall ({precipitation:.1} mm/day), irrigation is mandatory"
        ));
    }
    notes
}

fn challenges(record: &EnvironmentalRecord) -> Vec<String> {
    let mut challenges = Vec::new();
    if record.precipitation_mm_day.is_some_and(|p| p < 1.0) {
        challenges.push("Low rainfall, an irrigation system is required".to_string());
    }
    if record.air_temp().is_some_and(|t| t > 35.0) {
        challenges.push("High temperatures, shading and extra watering needed".to_string());
    }
    if record.elevation_m.is_some_and(|e| e > 1500.0) {
        challenges.push("High altitude, frost risk shortens the season".to_string());
    }
    if challenges.is_empty() {
        challenges.push("No significant challenges identified".to_string());
    }
    challenges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::GeoPoint;

    fn record() -> EnvironmentalRecord {
        EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0))
    }

    fn plan(record: &EnvironmentalRecord, area: f64) -> AgriculturePlan {
        let scores = aggregate(record).scores;
        plan_agriculture(&scores, record, area)
    }

    #[test]
    fn test_hot_climate_splits_on_rainfall() {
        let mut r = record();
        r.air_temp_c = Some(27.0);
        r.precipitation_mm_day = Some(2.5);
        let wet = plan(&r, 10_000.0);
        assert_eq!(wet.recommended_crops[0].name, "Corn");

        r.precipitation_mm_day = Some(1.0);
        let dry = plan(&r, 10_000.0);
        assert_eq!(dry.recommended_crops[0].name, "Sunflower");
        assert_eq!(dry.irrigation, IrrigationNeed::Seasonal);
    }

    #[test]
    fn test_temperature_buckets() {
        let mut r = record();
        r.precipitation_mm_day = Some(2.5);

        r.air_temp_c = Some(22.0);
        assert_eq!(plan(&r, 10_000.0).recommended_crops[0].name, "Wheat");

        r.air_temp_c = Some(17.0);
        assert_eq!(plan(&r, 10_000.0).recommended_crops[0].name, "Wheat");
        assert_eq!(plan(&r, 10_000.0).recommended_crops.len(), 5);

        r.air_temp_c = Some(10.0);
        assert_eq!(plan(&r, 10_000.0).recommended_crops[0].name, "Barley");
    }

    #[test]
    fn test_high_altitude_overrides_climate_bucket() {
        let mut r = record();
        r.air_temp_c = Some(27.0);
        r.precipitation_mm_day = Some(3.0);
        r.elevation_m = Some(1800.0);
        let p = plan(&r, 10_000.0);
        assert_eq!(p.recommended_crops[0].name, "Barley (highland)");
        assert!(p
            .challenges
            .iter()
            .any(|c| c.contains("frost")));
    }

    #[test]
    fn test_missing_temperature_gives_empty_crop_list() {
        let mut r = record();
        r.air_temp_c = Some(-999.0);
        let p = plan(&r, 10_000.0);
        assert!(p.recommended_crops.is_empty());
        assert_eq!(p.climate_notes.len(), 1);
    }

    #[test]
    fn test_yield_scales_with_area() {
        let r = record();
        assert_eq!(plan(&r, 10_000.0).estimated_yield_kg_year, 40_000.0);
        assert_eq!(plan(&r, 25_000.0).estimated_yield_kg_year, 100_000.0);
    }

    #[test]
    fn test_dry_site_needs_irrigation() {
        let mut r = record();
        r.precipitation_mm_day = Some(0.5);
        let p = plan(&r, 10_000.0);
        assert_eq!(p.irrigation, IrrigationNeed::High);
        assert!(p.challenges[0].contains("irrigation"));
    }
}
