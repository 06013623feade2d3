//! Tree-planting suitability for a site, independent of the land-use
//! recommendation. Sparse current cover is an asset here: it means new
//! planting has room to take.

use serde::{Deserialize, Serialize};

use crate::record::EnvironmentalRecord;

/// Qualitative banding of the afforestation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityLevel {
    VerySuitable,
    Suitable,
    Moderate,
    Marginal,
}

impl SuitabilityLevel {
    fn from_score(score: u8) -> Self {
        if score >= 80 {
            SuitabilityLevel::VerySuitable
        } else if score >= 60 {
            SuitabilityLevel::Suitable
        } else if score >= 40 {
            SuitabilityLevel::Moderate
        } else {
            SuitabilityLevel::Marginal
        }
    }
}

/// Result of the afforestation assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AfforestationSuitability {
    pub score: u8,
    pub level: SuitabilityLevel,
    pub factors: Vec<&'static str>,
    pub recommended_species: Vec<&'static str>,
}

/// Score how well the site would take new tree planting.
pub fn afforestation_suitability(record: &EnvironmentalRecord) -> AfforestationSuitability {
    let mut score = 0u32;
    let mut factors = Vec::new();

    // Sparse cover leaves room for new stands
    if let Some(veg) = record.vegetation_index {
        if veg < 0.4 {
            score += 40;
            factors.push("Sparse vegetation, ideal for new planting");
        } else if veg < 0.6 {
            score += 20;
            factors.push("Moderate vegetation, planting feasible");
        }
    }

    if let Some(temp) = record.air_temp() {
        if (15.0..=25.0).contains(&temp) {
            score += 30;
            factors.push("Optimal temperature for sapling growth");
        } else if (10.0..=30.0).contains(&temp) {
            score += 15;
            factors.push("Acceptable temperature range");
        }
    }

    if let Some(elev) = record.elevation_m {
        if elev > 100.0 && elev < 2000.0 {
            score += 30;
            factors.push("Suitable elevation band");
        }
    }

    let score = score.min(100) as u8;
    AfforestationSuitability {
        score,
        level: SuitabilityLevel::from_score(score),
        factors,
        recommended_species: recommended_species(record),
    }
}

fn recommended_species(record: &EnvironmentalRecord) -> Vec<&'static str> {
    match record.air_temp() {
        Some(temp) if temp > 25.0 => vec!["Olive", "Almond", "Pine", "Acacia"],
        Some(temp) if temp > 15.0 => vec!["Oak", "Plane", "Linden", "Poplar"],
        Some(_) => vec!["Pine", "Spruce", "Fir", "Cypress"],
        None => vec!["Oak", "Plane", "Pine", "Poplar"],
    }
}
