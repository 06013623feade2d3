use crate::record::{EnvironmentalRecord, FireRiskLevel};
use crate::scoring::clamp_score;

/// Tourism suitability score in [0, 100].
///
/// Lush vegetation, pleasant temperatures and scenic elevation carry the
/// score; a fire-safe area earns a safety bonus, and the combination of
/// dense vegetation with highland terrain adds a nature-tourism bonus.
pub fn tourism_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    if let Some(veg) = record.vegetation_index {
        if veg > 0.6 {
            score += 25; // lush
        } else if veg > 0.4 {
            score += 15;
        }
    }

    if let Some(temp) = record.air_temp() {
        if (18.0..=28.0).contains(&temp) {
            score += 25;
        } else if (10.0..=32.0).contains(&temp) {
            score += 15;
        }
    }

    // Scenic highlands; bounds deliberately strict, a site at exactly 800m
    // falls between the two bands
    if let Some(elev) = record.elevation_m {
        if elev > 800.0 && elev < 2500.0 {
            score += 25;
        } else if elev > 200.0 && elev < 800.0 {
            score += 10;
        }
    }

    match record.fire_risk {
        FireRiskLevel::Low => score += 15,
        FireRiskLevel::Medium => score += 5,
        FireRiskLevel::High => {}
    }

    // Nature tourism: dense vegetation on high ground
    if let (Some(veg), Some(elev)) = (record.vegetation_index, record.elevation_m) {
        if veg > 0.5 && elev > 500.0 {
            score += 10;
        }
    }

    clamp_score(score)
}
