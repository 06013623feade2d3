use crate::record::EnvironmentalRecord;
use crate::regions::{is_coastal, wind_corridor};
use crate::scoring::clamp_score;

/// Wind-farm suitability score in [0, 100].
///
/// Topography-and-coastline heuristic: ridges score on elevation alone,
/// coastal strips add a sea-breeze tier, and two named corridors carry an
/// extra bonus. Inland lowlands are penalized. A proper assessment needs a
/// year of mast measurements; this only ranks candidate terrain.
pub fn wind_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;
    let coastal = is_coastal(record.location);

    // Ridge/mountain tiers
    if let Some(elev) = record.elevation_m {
        if elev > 1500.0 {
            score += 35;
        } else if elev > 1200.0 {
            score += 30;
        } else if elev > 900.0 {
            score += 25;
        } else if elev > 600.0 {
            score += 15;
        } else if elev > 300.0 {
            score += 5;
        }
    }

    if coastal {
        // Sea-breeze tier stacks on top of the elevation tier
        if let Some(elev) = record.elevation_m {
            if elev < 100.0 {
                score += 25;
            } else if elev < 300.0 {
                score += 20;
            } else if elev < 600.0 {
                score += 15;
            } else {
                score += 10;
            }
        }

        // Named corridors only count on the coast
        if let Some((_, bonus)) = wind_corridor(record.location) {
            score += bonus;
        }
    } else if let Some(elev) = record.elevation_m {
        // Inland plains have very poor wind
        if elev < 300.0 {
            score -= 15;
        } else if elev < 600.0 {
            score -= 5;
        }
    }

    clamp_score(score)
}
