use crate::record::{EnvironmentalRecord, FireRiskLevel, FloodRisk};
use crate::scoring::clamp_score;

/// Residential suitability score in [0, 100].
///
/// Rewards sparse vegetation (cheap to build on), temperate climate,
/// mid-range elevation and a low flood label; penalizes fire incidence and
/// temperature extremes.
pub fn residential_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    // Sparse vegetation is easier to build on
    if let Some(veg) = record.vegetation_index {
        if veg < 0.4 {
            score += 20;
        }
    }

    if let Some(temp) = record.air_temp() {
        if (10.0..=30.0).contains(&temp) {
            score += 25;
        }
    }

    // Flat mid-elevation terrain suits construction
    if let Some(elev) = record.elevation_m {
        if (100.0..=1500.0).contains(&elev) {
            score += 25;
        }
    }

    // High/unknown flood labels earn nothing
    match record.flood_risk {
        Some(FloodRisk::Low) => score += 20,
        Some(FloodRisk::Moderate) => score += 10,
        _ => {}
    }

    match record.fire_risk {
        FireRiskLevel::High => score -= 20,
        FireRiskLevel::Medium => score -= 10,
        FireRiskLevel::Low => {}
    }

    // Extreme heat or cold raises running costs
    if let Some(temp) = record.air_temp() {
        if temp > 35.0 || temp < 5.0 {
            score -= 10;
        }
    }

    clamp_score(score)
}
