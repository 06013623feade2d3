use serde::{Deserialize, Serialize};

use crate::aggregate::ScoreSet;
use crate::planning::{
    GrowthRate, WaterDemand, AVERAGE_HOUSEHOLD_SIZE, TREE_CANOPY_M2, TREE_CO2_ABSORPTION_KG_YEAR,
    WHO_GREEN_AREA_PER_PERSON_M2, WHO_MINIMUM_GREEN_AREA_M2,
};
use crate::record::EnvironmentalRecord;

/// Share of the site left after roads and infrastructure.
const USABLE_AREA_FRACTION: f64 = 0.7;
/// Gross area consumed per house, m².
const AREA_PER_HOUSE_M2: f64 = 120.0;
/// Annual population growth used for the 5/10-year projections.
const ANNUAL_GROWTH_RATE: f64 = 0.015;
/// Cap on green area as a share of the whole site.
const MAX_GREEN_AREA_FRACTION: f64 = 0.3;

/// Housing and population capacity of the site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HousingCapacity {
    pub max_houses: u32,
    pub estimated_population: u32,
    pub population_5_years: u32,
    pub population_10_years: u32,
    pub population_per_hectare: u32,
    pub households_per_hectare: f64,
}

/// WHO-standard green-space targets and the tree-planting gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreenSpaceTargets {
    pub ideal_green_area_m2: f64,
    pub minimum_green_area_m2: f64,
    /// Ideal target capped at 30% of the site.
    pub recommended_green_area_m2: f64,
    pub green_area_percent: f64,
    /// Canopy share estimated from the vegetation index.
    pub current_tree_coverage_percent: f64,
    pub current_trees: u32,
    pub target_trees: u32,
    pub additional_trees_needed: u32,
    pub co2_reduction_kg_year: f64,
    pub co2_reduction_tons_10_years: f64,
}

/// Seismic tier from the elevation proxy. Not a substitute for a real
/// seismic-zone lookup; lower elevations sit closer to the major grabens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeismicTier {
    High,
    Moderate,
    Low,
}

/// Building-height and structural guidance for a seismic tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeismicAssessment {
    pub tier: SeismicTier,
    pub description: &'static str,
    pub max_floors: &'static str,
    pub requirements: Vec<&'static str>,
}

impl SeismicAssessment {
    fn from_elevation(elevation_m: Option<f64>) -> Self {
        let elevation = elevation_m.unwrap_or(500.0);
        if elevation < 200.0 {
            SeismicAssessment {
                tier: SeismicTier::High,
                description: "High seismic risk, special structural standards required",
                max_floors: "5-6 floors (max 20m); up to 8 with base isolation",
                requirements: vec![
                    "Base-isolated foundation system",
                    "Reinforced-concrete frame with steel bracing",
                    "Regular structural inspections",
                    "Mandatory evacuation plan",
                ],
            }
        } else if elevation < 800.0 {
            SeismicAssessment {
                tier: SeismicTier::Moderate,
                description: "Moderate seismic risk, standard seismic code applies",
                max_floors: "8-10 floors (max 35m)",
                requirements: vec![
                    "Reinforced-concrete frame",
                    "Code-compliant seismic design",
                    "Certified material quality",
                    "Periodic structural audits",
                ],
            }
        } else {
            SeismicAssessment {
                tier: SeismicTier::Low,
                description: "Low seismic risk, standard building norms suffice",
                max_floors: "12+ floors subject to local zoning",
                requirements: vec![
                    "Standard reinforced-concrete system",
                    "Baseline seismic-code compliance",
                    "Normal quality control",
                ],
            }
        }
    }
}

/// Urban tree species with planning attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeSpecies {
    pub name: &'static str,
    pub co2_kg_year: f64,
    pub water: WaterDemand,
    pub growth: GrowthRate,
}

const fn species(
    name: &'static str,
    co2_kg_year: f64,
    water: WaterDemand,
    growth: GrowthRate,
) -> TreeSpecies {
    TreeSpecies {
        name,
        co2_kg_year,
        water,
        growth,
    }
}

const HOT_DRY_SPECIES: [TreeSpecies; 4] = [
    species("Acacia", 22.0, WaterDemand::Low, GrowthRate::Fast),
    species("Olive", 18.0, WaterDemand::VeryLow, GrowthRate::Slow),
    species("Chinaberry", 25.0, WaterDemand::Low, GrowthRate::Fast),
    species("Cypress", 15.0, WaterDemand::Low, GrowthRate::Moderate),
];

const HOT_WET_SPECIES: [TreeSpecies; 4] = [
    species("Plane", 30.0, WaterDemand::High, GrowthRate::VeryFast),
    species("Poplar", 28.0, WaterDemand::High, GrowthRate::VeryFast),
    species("Mulberry", 20.0, WaterDemand::Moderate, GrowthRate::Fast),
    species("Hackberry", 22.0, WaterDemand::Moderate, GrowthRate::Fast),
];

const TEMPERATE_SPECIES: [TreeSpecies; 5] = [
    species("Oak", 25.0, WaterDemand::Moderate, GrowthRate::Slow),
    species("Linden", 22.0, WaterDemand::Moderate, GrowthRate::Moderate),
    species("Chestnut", 24.0, WaterDemand::Moderate, GrowthRate::Moderate),
    species("Pine", 20.0, WaterDemand::Low, GrowthRate::Moderate),
    species("Maple", 23.0, WaterDemand::Moderate, GrowthRate::Fast),
];

const COOL_SPECIES: [TreeSpecies; 4] = [
    species("Black pine", 20.0, WaterDemand::Low, GrowthRate::Moderate),
    species("Spruce", 18.0, WaterDemand::Moderate, GrowthRate::Moderate),
    species("Beech", 22.0, WaterDemand::Moderate, GrowthRate::Slow),
    species("Juniper", 15.0, WaterDemand::Low, GrowthRate::Slow),
];

const HIGHLAND_SPECIES: [TreeSpecies; 4] = [
    species("Black pine", 18.0, WaterDemand::Low, GrowthRate::Slow),
    species("Spruce", 16.0, WaterDemand::Moderate, GrowthRate::Slow),
    species("Cedar", 20.0, WaterDemand::Low, GrowthRate::VerySlow),
    species("Juniper", 12.0, WaterDemand::Low, GrowthRate::Slow),
];

const DEFAULT_SPECIES: [TreeSpecies; 4] = [
    species("Plane", 30.0, WaterDemand::High, GrowthRate::VeryFast),
    species("Oak", 25.0, WaterDemand::Moderate, GrowthRate::Slow),
    species("Linden", 22.0, WaterDemand::Moderate, GrowthRate::Moderate),
    species("Acacia", 22.0, WaterDemand::Low, GrowthRate::Fast),
];

/// Residential development plan with WHO green standards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidentialPlan {
    pub confidence: u8,
    pub capacity: HousingCapacity,
    pub green_targets: GreenSpaceTargets,
    pub seismic: SeismicAssessment,
    /// Site split: roads/parking, buildings, public spaces, green area (m²).
    pub roads_parking_m2: f64,
    pub buildings_m2: f64,
    pub public_spaces_m2: f64,
    pub tree_species: Vec<TreeSpecies>,
    pub building_recommendations: Vec<&'static str>,
    pub energy_recommendations: Vec<&'static str>,
    pub challenges: Vec<String>,
    pub sustainability_score: u8,
}

/// Build the residential plan for a site.
pub fn plan_residential(
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> ResidentialPlan {
    let usable_area = area_size_m2 * USABLE_AREA_FRACTION;
    let max_houses = (usable_area / AREA_PER_HOUSE_M2).floor();
    let population = max_houses * AVERAGE_HOUSEHOLD_SIZE;
    let hectares = area_size_m2 / 10_000.0;

    let capacity = HousingCapacity {
        max_houses: max_houses as u32,
        estimated_population: population.round() as u32,
        population_5_years: (population * (1.0 + ANNUAL_GROWTH_RATE).powi(5)).round() as u32,
        population_10_years: (population * (1.0 + ANNUAL_GROWTH_RATE).powi(10)).round() as u32,
        population_per_hectare: (population / hectares).round() as u32,
        households_per_hectare: round1(max_houses / hectares),
    };

    let ideal_green = population * WHO_GREEN_AREA_PER_PERSON_M2;
    let minimum_green = population * WHO_MINIMUM_GREEN_AREA_M2;
    let recommended_green = ideal_green.min(area_size_m2 * MAX_GREEN_AREA_FRACTION);

    // Canopy estimated from the vegetation index via a linear proxy
    let coverage_percent = record
        .vegetation_index
        .map_or(0.0, |veg| ((veg - 0.2) * 100.0).max(0.0));
    let current_trees = (area_size_m2 * coverage_percent / 100.0 / TREE_CANOPY_M2).floor() as u32;
    let target_trees = (recommended_green / TREE_CANOPY_M2).ceil() as u32;
    let additional_trees = target_trees.saturating_sub(current_trees);
    let co2_kg_year = f64::from(target_trees) * TREE_CO2_ABSORPTION_KG_YEAR;

    let green_targets = GreenSpaceTargets {
        ideal_green_area_m2: ideal_green.round(),
        minimum_green_area_m2: minimum_green.round(),
        recommended_green_area_m2: recommended_green.round(),
        green_area_percent: round1(recommended_green / area_size_m2 * 100.0),
        current_tree_coverage_percent: round1(coverage_percent),
        current_trees,
        target_trees,
        additional_trees_needed: additional_trees,
        co2_reduction_kg_year: co2_kg_year.round(),
        co2_reduction_tons_10_years: round1(co2_kg_year * 10.0 / 1000.0),
    };

    ResidentialPlan {
        confidence: scores.residential,
        capacity,
        green_targets,
        seismic: SeismicAssessment::from_elevation(record.elevation_m),
        roads_parking_m2: (area_size_m2 * 0.20).round(),
        buildings_m2: usable_area.round(),
        public_spaces_m2: (area_size_m2 * 0.10).round(),
        tree_species: select_species(record),
        building_recommendations: building_recommendations(record),
        energy_recommendations: energy_recommendations(record),
        challenges: challenges(record),
        sustainability_score: sustainability_score(scores, recommended_green, area_size_m2),
    }
}

/// Same climate tiering as the crop selection, with a high-elevation
/// override; falls back to hardy all-rounders without temperature data.
fn select_species(record: &EnvironmentalRecord) -> Vec<TreeSpecies> {
    if record.elevation_m.is_some_and(|e| e > 1500.0) {
        return HIGHLAND_SPECIES.to_vec();
    }
    let Some(temp) = record.air_temp() else {
        return DEFAULT_SPECIES.to_vec();
    };
    let precipitation = record.precipitation_mm_day.unwrap_or(2.0);

    let table: &[TreeSpecies] = if temp > 25.0 && precipitation < 1.5 {
        &HOT_DRY_SPECIES
    } else if temp > 25.0 {
        &HOT_WET_SPECIES
    } else if temp >= 15.0 {
        &TEMPERATE_SPECIES
    } else {
        &COOL_SPECIES
    };
    table.to_vec()
}

fn building_recommendations(record: &EnvironmentalRecord) -> Vec<&'static str> {
    let mut recommendations = Vec::new();
    if let Some(temp) = record.air_temp() {
        if temp > 30.0 {
            recommendations.push("Light-colored facades to reflect heat");
            recommendations.push("Wide eaves for shading");
            recommendations.push("High-grade insulation to cut cooling costs");
        } else if temp < 10.0 {
            recommendations.push("Thick exterior insulation against heat loss");
            recommendations.push("Large south-facing glazing");
            recommendations.push("Windbreak landscaping");
        }
    }
    if record.elevation_m.is_some_and(|e| e > 1000.0) {
        recommendations.push("Roofs dimensioned for snow load");
        recommendations.push("Seismic-resistant structural system");
    }
    recommendations.push("Green roofs with rainwater capture");
    recommendations.push("Rooftop solar integration");
    recommendations.push("Smart-home infrastructure");
    recommendations
}

fn energy_recommendations(record: &EnvironmentalRecord) -> Vec<&'static str> {
    let mut recommendations = Vec::new();
    if record.solar_radiation_wm2.is_some_and(|r| r > 180.0) {
        recommendations.push("High solar potential: panels recommended on every roof");
    }
    if let Some(temp) = record.air_temp() {
        if temp > 25.0 {
            recommendations.push("Central cooling or A-class air conditioning");
        } else if temp < 15.0 {
            recommendations.push("Heat pump or gas-fired heating");
        }
    }
    recommendations.push("A-class energy efficiency mandatory");
    recommendations
}

fn challenges(record: &EnvironmentalRecord) -> Vec<String> {
    let mut challenges = Vec::new();
    if record.air_temp().is_some_and(|t| t > 35.0) {
        challenges.push("High temperatures drive up energy costs".to_string());
    }
    if record
        .flood_risk
        .is_some_and(|f| f != crate::record::FloodRisk::Low)
    {
        challenges.push("Flood risk, drainage infrastructure required".to_string());
    }
    if record.vegetation_index.is_some_and(|v| v < 0.2) {
        challenges.push("Very little existing greenery, afforestation needed".to_string());
    }
    if challenges.is_empty() {
        challenges.push("No significant challenges identified".to_string());
    }
    challenges
}

/// Composite sustainability index: green share, residential fit and solar
/// potential, each capped.
fn sustainability_score(scores: &ScoreSet, green_area_m2: f64, total_area_m2: f64) -> u8 {
    let green_percentage = green_area_m2 / total_area_m2 * 100.0;
    let score = (green_percentage * 1.5).min(40.0)
        + (f64::from(scores.residential) * 0.3).min(30.0)
        + (f64::from(scores.solar_energy) * 0.3).min(30.0);
    score.round() as u8
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
