use serde::Serialize;

use crate::aggregate::ScoreSet;
use crate::planning::{IrrigationNeed, TREE_CANOPY_M2, TREE_CO2_ABSORPTION_KG_YEAR};
use crate::record::EnvironmentalRecord;

/// Annual oxygen output of one mature tree (kg/year).
const TREE_OXYGEN_KG_YEAR: f64 = 120.0;

/// One slice of the park's tree mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesShare {
    pub species: &'static str,
    pub role: &'static str,
    pub count: u32,
}

/// Park / green-area design plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreenAreaPlan {
    pub confidence: u8,
    pub total_trees: u32,
    pub walking_paths_m: f64,
    pub playground_m2: f64,
    pub sports_area_m2: f64,
    pub picnic_spots: u32,
    pub parking_spaces: u32,
    pub species_mix: Vec<SpeciesShare>,
    pub co2_absorption_kg_year: f64,
    pub co2_absorption_tons_year: f64,
    pub oxygen_production_kg_year: f64,
    pub estimated_bird_species: u32,
    pub visitor_capacity: u32,
    pub maintenance_staff: u32,
    pub irrigation: IrrigationNeed,
}

/// Build the park plan for a site. Tree capacity assumes one mature canopy
/// per 25 m²; fixed percentage splits cover paths and amenities.
pub fn plan_green_area(
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> GreenAreaPlan {
    let total_trees = (area_size_m2 / TREE_CANOPY_M2).ceil() as u32;
    let co2_kg_year = f64::from(total_trees) * TREE_CO2_ABSORPTION_KG_YEAR;

    GreenAreaPlan {
        confidence: scores.green_area,
        total_trees,
        walking_paths_m: (area_size_m2 * 0.15).round(),
        playground_m2: (area_size_m2 * 0.10).round(),
        sports_area_m2: (area_size_m2 * 0.10).round(),
        picnic_spots: (area_size_m2 / 1000.0).floor() as u32,
        parking_spaces: (area_size_m2 / 500.0).floor() as u32,
        species_mix: species_mix(total_trees),
        co2_absorption_kg_year: co2_kg_year.round(),
        co2_absorption_tons_year: round2(co2_kg_year / 1000.0),
        oxygen_production_kg_year: (f64::from(total_trees) * TREE_OXYGEN_KG_YEAR).round(),
        estimated_bird_species: (f64::from(total_trees) / 10.0).round() as u32,
        visitor_capacity: (area_size_m2 / 10.0).round() as u32,
        maintenance_staff: (area_size_m2 / 10_000.0).ceil() as u32,
        irrigation: IrrigationNeed::from_precipitation(record.precipitation_mm_day),
    }
}

/// Fixed mix: shade, longevity, fragrance, evergreen cover and ornament.
fn species_mix(total_trees: u32) -> Vec<SpeciesShare> {
    let share = |fraction: f64| (f64::from(total_trees) * fraction).round() as u32;
    vec![
        SpeciesShare {
            species: "Plane",
            role: "shade",
            count: share(0.30),
        },
        SpeciesShare {
            species: "Oak",
            role: "longevity",
            count: share(0.25),
        },
        SpeciesShare {
            species: "Linden",
            role: "fragrance",
            count: share(0.20),
        },
        SpeciesShare {
            species: "Pine",
            role: "evergreen",
            count: share(0.15),
        },
        SpeciesShare {
            species: "Ornamental varieties",
            role: "ornament",
            count: share(0.10),
        },
    ]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
