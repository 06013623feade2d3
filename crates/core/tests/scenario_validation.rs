//! Pinned end-to-end scenarios locking in the exact arithmetic of the
//! score functions, the aggregator and the planners.

use landplan_core::planning::plan_residential;
use landplan_core::scoring::{geothermal_score, residential_score, wind_score};
use landplan_core::{aggregate, EnvironmentalRecord, FireRiskLevel, GeoPoint, LandUse};

/// Fertile inland site: every agricultural factor lands in its best band.
#[test]
fn test_scenario_fertile_inland_site() {
    let mut record = EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0));
    record.vegetation_index = Some(0.6);
    record.air_temp_c = Some(20.0);
    record.elevation_m = Some(800.0);
    record.precipitation_mm_day = Some(2.5);
    record.root_zone_moisture_pct = Some(50.0);

    let assessment = aggregate(&record);
    // veg 25 + temp 20 + elevation 15 + fire 0 + precip 15 + moisture 25,
    // clamped at the cap
    assert_eq!(assessment.scores.agriculture, 100);
    assert_eq!(assessment.scores.residential, 50);
    assert_eq!(assessment.scores.green_area, 80);
    assert_eq!(assessment.scores.solar_energy, 25);
    assert_eq!(assessment.scores.wind_energy, 15);
    assert_eq!(assessment.scores.tourism, 65);
    assert_eq!(assessment.scores.geothermal, 5);

    assert_eq!(assessment.recommendation.primary, LandUse::Agriculture);
    assert_eq!(assessment.recommendation.secondary, LandUse::GreenArea);
    assert_eq!(assessment.recommendation.confidence, 100);

    // total 340; agriculture's share rounds to one decimal
    assert_eq!(assessment.probabilities.agriculture, 29.4);
}

/// The -999 sentinel must behave exactly like a missing temperature in
/// every score function.
#[test]
fn test_scenario_sentinel_equals_null() {
    let base = {
        let mut r = EnvironmentalRecord::empty(GeoPoint::new(38.4, 27.1));
        r.vegetation_index = Some(0.35);
        r.elevation_m = Some(300.0);
        r.precipitation_mm_day = Some(1.2);
        r.solar_radiation_wm2 = Some(210.0);
        r.root_zone_moisture_pct = Some(45.0);
        r.fire_risk = FireRiskLevel::Medium;
        r
    };

    let mut with_sentinel = base.clone();
    with_sentinel.air_temp_c = Some(-999.0);
    let mut with_none = base;
    with_none.air_temp_c = None;

    let sentinel = aggregate(&with_sentinel);
    let missing = aggregate(&with_none);
    assert_eq!(sentinel, missing);
    assert_eq!(
        residential_score(&with_sentinel),
        residential_score(&with_none)
    );
}

/// A North Aegean coastal lowland earns both the sea-breeze tier and the
/// corridor bonus; the same terrain inland earns nothing.
#[test]
fn test_scenario_north_aegean_corridor() {
    let mut coastal = EnvironmentalRecord::empty(GeoPoint::new(39.0, 26.8));
    coastal.elevation_m = Some(50.0);
    // coastal lowland 25 + corridor 15
    assert_eq!(wind_score(&coastal), 40);

    let mut inland = EnvironmentalRecord::empty(GeoPoint::new(39.0, 33.5));
    inland.elevation_m = Some(50.0);
    assert_eq!(wind_score(&inland), 0);
    assert!(wind_score(&coastal) > wind_score(&inland));
}

/// Ten hectares of housing: the WHO-standard capacity arithmetic.
#[test]
fn test_scenario_ten_hectare_settlement() {
    let record = EnvironmentalRecord::empty(GeoPoint::new(38.0, 32.0));
    let scores = aggregate(&record).scores;
    let plan = plan_residential(&scores, &record, 100_000.0);

    assert_eq!(plan.capacity.max_houses, 583); // floor(70_000 / 120)
    assert_eq!(plan.capacity.estimated_population, 2041); // round(583 * 3.5)
}

/// Outside the four named fields, geothermal stays within its low
/// baseline no matter how favorable the other observations are.
#[test]
fn test_scenario_geothermal_stays_rare() {
    let spots = [
        GeoPoint::new(37.0, 38.5),
        GeoPoint::new(41.0, 29.0),
        GeoPoint::new(36.2, 30.0),
    ];
    for spot in spots {
        for temp in [None, Some(18.0), Some(34.0), Some(45.0)] {
            for elevation in [None, Some(50.0), Some(400.0), Some(1800.0)] {
                let mut record = EnvironmentalRecord::empty(spot);
                record.air_temp_c = temp;
                record.elevation_m = elevation;
                let score = geothermal_score(&record);
                assert!(score <= 15, "score {score} at {spot:?}");
            }
        }
    }
}

/// Inside the Denizli-Aydin graben the same observations unlock the
/// high-potential adjustments.
#[test]
fn test_scenario_geothermal_field_contrast() {
    let mut inside = EnvironmentalRecord::empty(GeoPoint::new(38.0, 28.5));
    inside.elevation_m = Some(150.0);
    inside.air_temp_c = Some(27.0);
    assert_eq!(geothermal_score(&inside), 60); // 35 + 15 + 10

    let mut outside = inside.clone();
    outside.location = GeoPoint::new(40.0, 33.0);
    assert_eq!(geothermal_score(&outside), 10); // 5 + 3 + 2
}
