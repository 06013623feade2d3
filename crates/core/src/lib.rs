//! Land-Use Suitability Scoring Engine
//!
//! Maps a bundle of environmental observations (vegetation index,
//! temperature, elevation, fire incidence, precipitation, soil moisture,
//! geographic position) into per-category suitability scores, normalized
//! probabilities, a primary recommendation and derived planning quantities.
//!
//! The engine is a decision-support overlay, not a simulation: weights are
//! hand-tuned heuristics, every function is pure and total, and a record
//! with missing observations degrades to floor scores instead of failing.

pub mod afforestation;
pub mod aggregate;
pub mod analysis;
pub mod category;
pub mod planning;
pub mod record;
pub mod regions;
pub mod report;
pub mod scoring;
pub mod swot;

// Re-export the engine surface
pub use afforestation::{afforestation_suitability, AfforestationSuitability};
pub use aggregate::{aggregate, ProbabilitySet, Recommendation, ScoreSet, SuitabilityAssessment};
pub use analysis::{analyze, LandUseAnalysis};
pub use category::LandUse;
pub use planning::{
    plan_agriculture, plan_for, plan_green_area, plan_residential, plan_solar, plan_wind,
    PlanningDetail,
};
pub use record::{EnvironmentalRecord, FireRiskLevel, FloodRisk, GeoPoint};
pub use report::render_report;
pub use swot::{generate_swot, SwotAnalysis};
