//! Qualitative SWOT analysis.
//!
//! A rule table, not a scored ranking: every statement is an independent
//! predicate over the same thresholds the score functions use, and the
//! output order follows rule-declaration order. Missing observations
//! suppress the rules keyed on them.

use serde::{Deserialize, Serialize};

use crate::aggregate::ScoreSet;
use crate::category::LandUse;
use crate::record::{EnvironmentalRecord, FireRiskLevel, FloodRisk};

/// Four categorized lists of qualitative statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Evaluate the full SWOT rule table for a site.
pub fn generate_swot(
    primary: LandUse,
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> SwotAnalysis {
    SwotAnalysis {
        strengths: strengths(primary, scores, record, area_size_m2),
        weaknesses: weaknesses(primary, scores, record, area_size_m2),
        opportunities: opportunities(scores, record),
        threats: threats(record),
    }
}

fn strengths(
    primary: LandUse,
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> Vec<String> {
    let mut items = vec!["Objective analysis backed by satellite observations".to_string()];

    if area_size_m2 > 100_000.0 {
        items.push("Large site (>10 ha), viable for utility-scale projects".to_string());
    }
    if record.vegetation_index.is_some_and(|v| v > 0.5) {
        items.push("High vegetation index, healthy existing cover".to_string());
    }
    if record.air_temp().is_some_and(|t| (15.0..=30.0).contains(&t)) {
        items.push("Ideal temperature range for both farming and settlement".to_string());
    }
    if record.fire_risk == FireRiskLevel::Low {
        items.push("Low fire incidence, safe surroundings".to_string());
    }
    if record
        .elevation_m
        .is_some_and(|e| e > 100.0 && e < 1500.0)
    {
        items.push("Favorable elevation, low flood exposure and easy construction".to_string());
    }
    if record.solar_radiation_wm2.is_some_and(|r| r > 180.0) {
        items.push("Strong solar irradiance, photovoltaic potential".to_string());
    }
    let primary_score = scores.get(primary);
    if primary_score > 70 {
        items.push(format!(
            "High suitability score ({primary_score}/100), confident recommendation"
        ));
    }
    items
}

fn weaknesses(
    primary: LandUse,
    scores: &ScoreSet,
    record: &EnvironmentalRecord,
    area_size_m2: f64,
) -> Vec<String> {
    let mut items = Vec::new();

    if record.vegetation_index.is_some_and(|v| v < 0.3) {
        items.push("Weak vegetation cover, afforestation needed".to_string());
    }
    if record.precipitation_mm_day.is_some_and(|p| p < 1.5) {
        items.push("Low rainfall, irrigation infrastructure is a must".to_string());
    }
    if let Some(temp) = record.air_temp() {
        if temp > 35.0 {
            items.push("High temperatures raise water and energy demand".to_string());
        } else if temp < 5.0 {
            items.push("Low temperatures, heating costs will be high".to_string());
        }
    }
    match record.fire_risk {
        FireRiskLevel::High => {
            items.push("High fire incidence, protective measures critical".to_string());
        }
        FireRiskLevel::Medium => {
            items.push("Moderate fire incidence, monitoring and prevention needed".to_string());
        }
        FireRiskLevel::Low => {}
    }
    if let Some(elevation) = record.elevation_m {
        if elevation < 50.0 {
            items.push("Very low elevation, inundation risk".to_string());
        } else if elevation > 2000.0 {
            items.push("High altitude raises construction and farming costs".to_string());
        }
    }
    if area_size_m2 < 5000.0 {
        items.push("Small site (<0.5 ha), limited flexibility of use".to_string());
    }
    if scores.get(primary) < 50 {
        items.push("Middling suitability score, extra mitigation may be needed".to_string());
    }
    items.push("Satellite data resolution limits micro-scale conclusions".to_string());
    items
}

fn opportunities(scores: &ScoreSet, record: &EnvironmentalRecord) -> Vec<String> {
    let mut items = Vec::new();

    if record.solar_radiation_wm2.is_some_and(|r| r > 180.0) {
        items.push("Solar integration could zero out on-site energy costs".to_string());
        items.push("Rooftop photovoltaics: generation plus feed-in revenue".to_string());
    }
    if record.vegetation_index.is_some_and(|v| v < 0.4) {
        items.push("Green-transformation project, path to WHO compliance".to_string());
        items.push("Carbon-credit programs can fund the planting".to_string());
    }
    if record.elevation_m.is_some_and(|e| e > 1500.0) {
        items.push("High altitude, nature and highland tourism potential".to_string());
    }
    if scores.agriculture > 40 {
        items.push("Organic-farming certification would add value".to_string());
        items.push("Agricultural enterprise creates local employment".to_string());
    }
    if scores.residential > 40 {
        items.push("Smart-city technology for a sustainable settlement".to_string());
        items.push("Green building certification (LEED/BREEAM)".to_string());
    }
    items.push("Zoning-plan updates can raise land value".to_string());
    items.push("Public-private partnership models attract investment".to_string());
    items.push("Sensor network enables real-time monitoring".to_string());
    items.push("A digital twin supports simulation before construction".to_string());
    items
}

fn threats(record: &EnvironmentalRecord) -> Vec<String> {
    let mut items = vec![
        "Climate change may shift temperature and rainfall patterns".to_string(),
    ];

    if record.fire_risk != FireRiskLevel::Low {
        items.push("Wildfire threat in the wider area".to_string());
    }
    // Anything but an explicit Low label counts as exposure
    if record.flood_risk != Some(FloodRisk::Low) {
        items.push("Flood risk endangers infrastructure and buildings".to_string());
    }
    if record
        .air_temp()
        .is_some_and(|t| t > 30.0 || t < 10.0)
    {
        items.push("Extreme weather inflates energy and water costs".to_string());
    }
    if record.precipitation_mm_day.is_some_and(|p| p < 2.0) {
        items.push("Water scarcity likely during drought periods".to_string());
    }
    items.push("Zoning changes could restrict the intended use".to_string());
    items.push("Unplanned urbanization pressure degrades the environment".to_string());
    items.push("Economic volatility can inflate investment costs".to_string());
    items.push("Local microclimate may deviate from the data".to_string());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::record::GeoPoint;

    fn record() -> EnvironmentalRecord {
        EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0))
    }

    fn swot_for(record: &EnvironmentalRecord, area: f64) -> SwotAnalysis {
        let assessment = aggregate(record);
        generate_swot(
            assessment.recommendation.primary,
            &assessment.scores,
            record,
            area,
        )
    }

    #[test]
    fn test_fixed_rules_always_present() {
        let swot = swot_for(&record(), 10_000.0);
        assert_eq!(
            swot.strengths[0],
            "Objective analysis backed by satellite observations"
        );
        assert!(swot
            .weaknesses
            .last()
            .unwrap()
            .contains("resolution limits"));
        assert!(swot.threats[0].contains("Climate change"));
        // The four standing opportunities survive an empty record
        assert_eq!(swot.opportunities.len(), 4);
    }

    #[test]
    fn test_missing_fields_suppress_their_rules() {
        let swot = swot_for(&record(), 10_000.0);
        // No vegetation reading: neither the low-cover weakness nor the
        // green-transformation opportunity may fire
        assert!(!swot.weaknesses.iter().any(|w| w.contains("vegetation")));
        assert!(!swot
            .opportunities
            .iter()
            .any(|o| o.contains("Green-transformation")));
    }

    #[test]
    fn test_sentinel_temperature_fires_no_temperature_rules() {
        let mut r = record();
        r.air_temp_c = Some(-999.0);
        let swot = swot_for(&r, 10_000.0);
        assert!(!swot.weaknesses.iter().any(|w| w.contains("temperatures")));
        assert!(!swot.threats.iter().any(|t| t.contains("Extreme weather")));
    }

    #[test]
    fn test_threshold_alignment_with_scores() {
        let mut r = record();
        r.vegetation_index = Some(0.55);
        r.air_temp_c = Some(22.0);
        r.elevation_m = Some(800.0);
        r.solar_radiation_wm2 = Some(190.0);
        let swot = swot_for(&r, 150_000.0);

        assert!(swot.strengths.iter().any(|s| s.contains("vegetation index")));
        assert!(swot.strengths.iter().any(|s| s.contains("temperature")));
        assert!(swot.strengths.iter().any(|s| s.contains("elevation")));
        assert!(swot.strengths.iter().any(|s| s.contains("irradiance")));
        assert!(swot.strengths.iter().any(|s| s.contains("Large site")));
    }

    #[test]
    fn test_flood_threat_fires_without_low_label() {
        let mut r = record();
        let swot = swot_for(&r, 10_000.0);
        assert!(swot.threats.iter().any(|t| t.contains("Flood")));

        r.flood_risk = Some(FloodRisk::Low);
        let swot = swot_for(&r, 10_000.0);
        assert!(!swot.threats.iter().any(|t| t.contains("Flood")));
    }

    #[test]
    fn test_small_dry_site_weaknesses() {
        let mut r = record();
        r.precipitation_mm_day = Some(0.8);
        let swot = swot_for(&r, 3000.0);
        assert!(swot.weaknesses.iter().any(|w| w.contains("rainfall")));
        assert!(swot.weaknesses.iter().any(|w| w.contains("Small site")));
        assert!(swot.threats.iter().any(|t| t.contains("scarcity")));
    }
}
