use crate::record::EnvironmentalRecord;
use crate::scoring::clamp_score;

/// Park / green-area suitability score in [0, 100].
///
/// Rewards headroom for new planting (sparse current vegetation), plant
/// growth temperature, moderate elevation, soil moisture and rainfall.
pub fn green_area_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    // Room for improvement: sparse cover means planting pays off
    if let Some(veg) = record.vegetation_index {
        if veg < 0.5 {
            score += 25;
        }
    }

    // Optimal growth temperature for trees and turf
    if let Some(temp) = record.air_temp() {
        if (15.0..=25.0).contains(&temp) {
            score += 25;
        }
    }

    if let Some(elev) = record.elevation_m {
        if (0.0..=2000.0).contains(&elev) {
            score += 20;
        }
    }

    // Moisture bell for trees/turf, wider than the agricultural one
    if let Some(moisture) = record.root_zone_moisture_pct {
        if (35.0..=75.0).contains(&moisture) {
            score += 20;
        } else if (25.0..=85.0).contains(&moisture) {
            score += 12;
        } else if moisture >= 15.0 {
            score += 5; // viable with irrigation
        }
    }

    if let Some(precip) = record.precipitation_mm_day {
        if precip > 1.0 {
            score += 15;
        }
    }

    clamp_score(score)
}
