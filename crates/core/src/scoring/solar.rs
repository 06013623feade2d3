use crate::record::EnvironmentalRecord;
use crate::scoring::clamp_score;

/// Solar-farm suitability score in [0, 100].
///
/// Irradiance dominates; sparse vegetation stands in for clear skies,
/// temperature models panel efficiency, and heavy rainfall is a cloud
/// proxy that costs a few points.
pub fn solar_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    // Irradiance bands, W/m² daily average
    if let Some(radiation) = record.solar_radiation_wm2 {
        if radiation > 250.0 {
            score += 35; // desert-grade
        } else if radiation > 220.0 {
            score += 30;
        } else if radiation > 190.0 {
            score += 25;
        } else if radiation > 160.0 {
            score += 20;
        } else if radiation > 130.0 {
            score += 15;
        } else {
            score += 10;
        }
    }

    // Sparse vegetation correlates with clear skies
    if let Some(veg) = record.vegetation_index {
        if veg < 0.2 {
            score += 20;
        } else if veg < 0.35 {
            score += 15;
        } else if veg < 0.5 {
            score += 10;
        } else {
            score += 5;
        }
    }

    // Panel efficiency peaks at 15-25°C and degrades in heat
    if let Some(temp) = record.air_temp() {
        if (15.0..=25.0).contains(&temp) {
            score += 20;
        } else if temp > 25.0 && temp <= 35.0 {
            score += 15;
        } else if temp > 10.0 && temp < 15.0 {
            score += 12;
        } else if temp > 35.0 && temp <= 40.0 {
            score += 10;
        } else {
            score += 5;
        }
    }

    // Dry climates get a bonus; heavy rain means clouds
    if let Some(precip) = record.precipitation_mm_day {
        if precip < 0.5 {
            score += 10;
        } else if precip < 1.5 {
            score += 5;
        } else if precip > 3.0 {
            score -= 5;
        }
    }

    clamp_score(score)
}
