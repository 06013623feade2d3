//! One-call site analysis: aggregation, planning detail for the primary
//! recommendation, afforestation suitability and SWOT, bundled for the
//! narrative layer.

use serde::Serialize;
use tracing::debug;

use crate::afforestation::{afforestation_suitability, AfforestationSuitability};
use crate::aggregate::{aggregate, SuitabilityAssessment};
use crate::planning::{plan_for, PlanningDetail};
use crate::record::{EnvironmentalRecord, GeoPoint};
use crate::swot::{generate_swot, SwotAnalysis};

/// Everything downstream consumers need for one site, keyed throughout by
/// the same seven category identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandUseAnalysis {
    pub location: GeoPoint,
    pub area_size_m2: f64,
    pub assessment: SuitabilityAssessment,
    /// Plan for the primary recommendation; absent for categories without a
    /// planner (tourism, geothermal).
    pub detail: Option<PlanningDetail>,
    pub afforestation: AfforestationSuitability,
    pub swot: SwotAnalysis,
}

/// Run the full analysis chain for one record and site area.
///
/// Pure and total: the same record and area always produce the identical
/// analysis, and a record with every field missing still yields a complete
/// structure.
pub fn analyze(record: &EnvironmentalRecord, area_size_m2: f64) -> LandUseAnalysis {
    let assessment = aggregate(record);
    let primary = assessment.recommendation.primary;
    debug!(primary = primary.key(), area_size_m2, "building analysis");

    LandUseAnalysis {
        location: record.location,
        area_size_m2,
        assessment,
        detail: plan_for(primary, &assessment.scores, record, area_size_m2),
        afforestation: afforestation_suitability(record),
        swot: generate_swot(primary, &assessment.scores, record, area_size_m2),
    }
}
