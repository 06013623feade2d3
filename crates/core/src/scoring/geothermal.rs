use crate::record::EnvironmentalRecord;
use crate::regions::geothermal_field;
use crate::scoring::clamp_score;

/// Geothermal suitability score in [0, 100].
///
/// Geothermal is a rare resource: the score is dominated by membership in
/// one of the known field rectangles. Elevation (grabens and valleys) and
/// climate add only small adjustments, and only meaningfully inside a
/// high-potential field. Outside every field the score stays near the
/// baseline no matter what the other observations say.
pub fn geothermal_score(record: &EnvironmentalRecord) -> u8 {
    let mut score = 0i32;

    let field = geothermal_field(record.location);
    let high_potential = field.is_some();
    match field {
        Some((_, bonus)) => score += bonus,
        None => score += 5, // minimal baseline everywhere else
    }

    // Fields sit in grabens; low elevation helps inside a known zone
    if let Some(elev) = record.elevation_m {
        if high_potential {
            if elev < 200.0 {
                score += 15;
            } else if elev < 500.0 {
                score += 10;
            } else if elev < 1000.0 {
                score += 5;
            }
        } else if elev < 200.0 {
            score += 3;
        }
    }

    if let Some(temp) = record.air_temp() {
        if high_potential {
            if temp > 25.0 {
                score += 10;
            } else if temp > 20.0 {
                score += 5;
            }
        } else if temp > 30.0 {
            score += 2;
        }
    }

    clamp_score(score)
}
