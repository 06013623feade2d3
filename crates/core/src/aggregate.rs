//! Suitability aggregation across all seven land-use categories.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::category::LandUse;
use crate::record::EnvironmentalRecord;
use crate::scoring::{
    agriculture_score, geothermal_score, green_area_score, residential_score, solar_score,
    tourism_score, wind_score,
};

/// Integer suitability score per category, each in [0, 100].
///
/// Every category is always present; an all-missing input record produces
/// floor scores rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub agriculture: u8,
    pub residential: u8,
    pub green_area: u8,
    pub solar_energy: u8,
    pub wind_energy: u8,
    pub tourism: u8,
    pub geothermal: u8,
}

impl ScoreSet {
    pub fn get(&self, category: LandUse) -> u8 {
        match category {
            LandUse::Agriculture => self.agriculture,
            LandUse::Residential => self.residential,
            LandUse::GreenArea => self.green_area,
            LandUse::SolarEnergy => self.solar_energy,
            LandUse::WindEnergy => self.wind_energy,
            LandUse::Tourism => self.tourism,
            LandUse::Geothermal => self.geothermal,
        }
    }

    /// Iterate (category, score) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (LandUse, u8)> + '_ {
        LandUse::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, s)| u32::from(s)).sum()
    }
}

/// Percentage share per category, one decimal place.
///
/// Sums to 100 (within rounding) whenever the score total is positive,
/// and is all-zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilitySet {
    pub agriculture: f64,
    pub residential: f64,
    pub green_area: f64,
    pub solar_energy: f64,
    pub wind_energy: f64,
    pub tourism: f64,
    pub geothermal: f64,
}

impl ProbabilitySet {
    pub fn get(&self, category: LandUse) -> f64 {
        match category {
            LandUse::Agriculture => self.agriculture,
            LandUse::Residential => self.residential,
            LandUse::GreenArea => self.green_area,
            LandUse::SolarEnergy => self.solar_energy,
            LandUse::WindEnergy => self.wind_energy,
            LandUse::Tourism => self.tourism,
            LandUse::Geothermal => self.geothermal,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandUse, f64)> + '_ {
        LandUse::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

/// Primary and runner-up land use for a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary: LandUse,
    pub secondary: LandUse,
    /// The primary category's raw score.
    pub confidence: u8,
}

/// Full aggregation result for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityAssessment {
    pub scores: ScoreSet,
    pub probabilities: ProbabilitySet,
    pub recommendation: Recommendation,
}

/// Score a record against all seven categories and pick the primary and
/// secondary recommendation.
///
/// Ties are broken by the fixed category order of [`LandUse::ALL`]. The
/// function is total and deterministic: identical records always produce
/// bit-identical assessments.
pub fn aggregate(record: &EnvironmentalRecord) -> SuitabilityAssessment {
    let scores = ScoreSet {
        agriculture: agriculture_score(record),
        residential: residential_score(record),
        green_area: green_area_score(record),
        solar_energy: solar_score(record),
        wind_energy: wind_score(record),
        tourism: tourism_score(record),
        geothermal: geothermal_score(record),
    };
    debug!(?scores, "category scores computed");

    let total = scores.total();
    let share = |score: u8| -> f64 {
        if total > 0 {
            round1(f64::from(score) / f64::from(total) * 100.0)
        } else {
            0.0
        }
    };
    let probabilities = ProbabilitySet {
        agriculture: share(scores.agriculture),
        residential: share(scores.residential),
        green_area: share(scores.green_area),
        solar_energy: share(scores.solar_energy),
        wind_energy: share(scores.wind_energy),
        tourism: share(scores.tourism),
        geothermal: share(scores.geothermal),
    };

    // Stable sort keeps declaration order among equal scores
    let mut ranked: Vec<(LandUse, u8)> = scores.iter().collect();
    ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    let (primary, confidence) = ranked[0];
    let (secondary, _) = ranked[1];

    let recommendation = Recommendation {
        primary,
        secondary,
        confidence,
    };
    info!(
        primary = primary.key(),
        secondary = secondary.key(),
        confidence,
        "recommendation selected"
    );

    SuitabilityAssessment {
        scores,
        probabilities,
        recommendation,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
