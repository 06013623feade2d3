use crate::record::{EnvironmentalRecord, FireRiskLevel};
use crate::scoring::clamp_score;

/// Agricultural suitability score in [0, 100].
///
/// Factors: vegetation density, growing-season temperature, elevation,
/// fire incidence penalty, precipitation, and root-zone soil moisture.
/// Missing soil moisture is neutral, not a penalty.
pub fn agriculture_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    // Vegetation density (healthier cover = arable land)
    if let Some(veg) = record.vegetation_index {
        if veg > 0.5 {
            score += 25;
        } else if veg > 0.3 {
            score += 15;
        } else if veg > 0.2 {
            score += 8;
        }
    }

    // Growing-season temperature band
    if let Some(temp) = record.air_temp() {
        if (15.0..=30.0).contains(&temp) {
            score += 20;
        } else if (10.0..=35.0).contains(&temp) {
            score += 12;
        }
    }

    // Most crops grow below 1500m
    if let Some(elev) = record.elevation_m {
        if (0.0..=1500.0).contains(&elev) {
            score += 15;
        } else if elev <= 2000.0 {
            score += 10;
        }
    }

    // Fire incidence penalty
    match record.fire_risk {
        FireRiskLevel::High => score -= 15,
        FireRiskLevel::Medium => score -= 5,
        FireRiskLevel::Low => {}
    }

    // Precipitation
    if let Some(precip) = record.precipitation_mm_day {
        if precip > 2.0 {
            score += 15;
        } else if precip > 1.0 {
            score += 8;
        }
    }

    // Root-zone soil moisture bell: 40-70% ideal, too dry or waterlogged
    // contributes nothing
    if let Some(moisture) = record.root_zone_moisture_pct {
        if (40.0..=70.0).contains(&moisture) {
            score += 25;
        } else if (30.0..=80.0).contains(&moisture) {
            score += 15;
        } else if (20.0..=90.0).contains(&moisture) {
            score += 8;
        }
    }

    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GeoPoint;

    fn record() -> EnvironmentalRecord {
        EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0))
    }

    #[test]
    fn test_vegetation_threshold_is_strict() {
        let mut r = record();
        r.vegetation_index = Some(0.5);
        assert_eq!(agriculture_score(&r), 15); // 0.5 is NOT > 0.5
        r.vegetation_index = Some(0.501);
        assert_eq!(agriculture_score(&r), 25);
        r.vegetation_index = Some(0.3);
        assert_eq!(agriculture_score(&r), 8);
        r.vegetation_index = Some(0.2);
        assert_eq!(agriculture_score(&r), 0);
    }

    #[test]
    fn test_temperature_band_edges_are_inclusive() {
        let mut r = record();
        r.air_temp_c = Some(15.0);
        assert_eq!(agriculture_score(&r), 20);
        r.air_temp_c = Some(30.0);
        assert_eq!(agriculture_score(&r), 20);
        r.air_temp_c = Some(30.1);
        assert_eq!(agriculture_score(&r), 12);
        r.air_temp_c = Some(10.0);
        assert_eq!(agriculture_score(&r), 12);
        r.air_temp_c = Some(9.9);
        assert_eq!(agriculture_score(&r), 0);
    }

    #[test]
    fn test_elevation_band_includes_below_sea_level_fallback() {
        let mut r = record();
        r.elevation_m = Some(1500.0);
        assert_eq!(agriculture_score(&r), 15);
        r.elevation_m = Some(1500.1);
        assert_eq!(agriculture_score(&r), 10);
        r.elevation_m = Some(2000.0);
        assert_eq!(agriculture_score(&r), 10);
        r.elevation_m = Some(2000.1);
        assert_eq!(agriculture_score(&r), 0);
        // Depressions below sea level fall through to the <=2000 branch
        r.elevation_m = Some(-5.0);
        assert_eq!(agriculture_score(&r), 10);
    }

    #[test]
    fn test_fire_penalty_applies_before_clamp() {
        let mut r = record();
        r.fire_risk = FireRiskLevel::High;
        assert_eq!(agriculture_score(&r), 0); // -15 clamps to 0

        r.precipitation_mm_day = Some(2.5);
        assert_eq!(agriculture_score(&r), 0); // 15 - 15
        r.fire_risk = FireRiskLevel::Medium;
        assert_eq!(agriculture_score(&r), 10); // 15 - 5
    }

    #[test]
    fn test_soil_moisture_bell() {
        let mut r = record();
        r.root_zone_moisture_pct = Some(55.0);
        assert_eq!(agriculture_score(&r), 25);
        r.root_zone_moisture_pct = Some(35.0);
        assert_eq!(agriculture_score(&r), 15);
        r.root_zone_moisture_pct = Some(85.0);
        assert_eq!(agriculture_score(&r), 8);
        r.root_zone_moisture_pct = Some(95.0);
        assert_eq!(agriculture_score(&r), 0);
        // Missing moisture is neutral
        r.root_zone_moisture_pct = None;
        assert_eq!(agriculture_score(&r), 0);
    }

    #[test]
    fn test_ideal_conditions_reach_the_cap() {
        let mut r = record();
        r.vegetation_index = Some(0.6);
        r.air_temp_c = Some(20.0);
        r.elevation_m = Some(800.0);
        r.precipitation_mm_day = Some(2.5);
        r.root_zone_moisture_pct = Some(50.0);
        // 25 + 20 + 15 + 15 + 25 = 100
        assert_eq!(agriculture_score(&r), 100);
    }
}
