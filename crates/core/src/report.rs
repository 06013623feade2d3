//! Plain-text narrative report for planners and decision makers.
//!
//! Formats the analysis bundle into sections: the input data, the score
//! table, an observation-by-observation commentary, the recommendation
//! with a what-if framing for the runner-up, and a SWOT matrix.

use std::fmt::Write as _;

use crate::analysis::LandUseAnalysis;
use crate::planning::PlanningDetail;
use crate::record::{EnvironmentalRecord, FireRiskLevel, VegetationHealth};
use crate::swot::SwotAnalysis;

const RULE: &str = "===================================================";

/// Render the full narrative report.
pub fn render_report(analysis: &LandUseAnalysis, record: &EnvironmentalRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "LAND-USE PLANNING REPORT");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Coordinates: {:.4} N, {:.4} E",
        analysis.location.latitude, analysis.location.longitude
    );
    let _ = writeln!(
        out,
        "Site area:   {:.0} m2 ({:.2} ha)",
        analysis.area_size_m2,
        analysis.area_size_m2 / 10_000.0
    );
    let _ = writeln!(
        out,
        "Sources:     satellite vegetation/climate proxy, fire incidence,\n             elevation, soil moisture\n"
    );

    score_table(&mut out, analysis);
    observations(&mut out, record);
    recommendation(&mut out, analysis);
    planning_summary(&mut out, analysis);
    afforestation(&mut out, analysis);
    swot_matrix(&mut out, &analysis.swot);

    out
}

fn score_table(out: &mut String, analysis: &LandUseAnalysis) {
    let _ = writeln!(out, "SUITABILITY SCORES");
    let _ = writeln!(out, "{RULE}");
    for (category, score) in analysis.assessment.scores.iter() {
        let probability = analysis.assessment.probabilities.get(category);
        let _ = writeln!(
            out,
            "  {:<20} {:>3}/100  ({:>4.1}% share)",
            category.label(),
            score,
            probability
        );
    }
    let _ = writeln!(out);
}

fn observations(out: &mut String, record: &EnvironmentalRecord) {
    let _ = writeln!(out, "OBSERVATIONS");
    let _ = writeln!(out, "{RULE}");

    if let Some(veg) = record.vegetation_index {
        let health = VegetationHealth::from_index(veg);
        let _ = writeln!(
            out,
            "  Vegetation index {veg:.2}: {} cover. Higher values mean denser,\n  healthier vegetation.",
            health.label()
        );
    } else {
        let _ = writeln!(out, "  Vegetation index unavailable.");
    }

    if let Some(precip) = record.precipitation_mm_day {
        let level = if precip > 3.0 {
            "high"
        } else if precip > 1.5 {
            "moderate"
        } else {
            "low"
        };
        let _ = writeln!(out, "  Precipitation {precip:.1} mm/day: {level} rainfall.");
    }

    if let Some(radiation) = record.solar_radiation_wm2 {
        let level = if radiation > 200.0 {
            "very high"
        } else if radiation > 150.0 {
            "high"
        } else {
            "moderate"
        };
        let _ = writeln!(
            out,
            "  Solar irradiance {radiation:.1} W/m2: {level} photovoltaic potential."
        );
    }

    if let Some(temp) = record.air_temp() {
        let climate = if temp > 35.0 {
            "very hot"
        } else if temp > 25.0 {
            "hot"
        } else if temp > 15.0 {
            "temperate"
        } else if temp > 5.0 {
            "cool"
        } else {
            "cold"
        };
        let _ = writeln!(out, "  Air temperature {temp:.1} C: {climate} climate.");
    } else {
        let _ = writeln!(out, "  Air temperature unavailable or invalid.");
    }

    if let Some(elevation) = record.elevation_m {
        let _ = writeln!(out, "  Elevation {elevation:.0} m.");
    }

    let fire = match record.fire_risk {
        FireRiskLevel::Low => "low",
        FireRiskLevel::Medium => "medium",
        FireRiskLevel::High => "high",
    };
    let _ = writeln!(
        out,
        "  Fire incidence: {} active detections, {fire} risk.\n",
        record.fire_count
    );
}

fn recommendation(out: &mut String, analysis: &LandUseAnalysis) {
    let rec = &analysis.assessment.recommendation;
    let _ = writeln!(out, "RECOMMENDATION");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  Primary use:   {} (score {}/100)",
        rec.primary.label(),
        rec.confidence
    );
    let _ = writeln!(
        out,
        "  Alternative:   {} (score {}/100)",
        rec.secondary.label(),
        analysis.assessment.scores.get(rec.secondary)
    );
    let _ = writeln!(
        out,
        "  If you intend to use this site as {} instead, the same planning\n  \
         formulas apply with the alternative's score as its confidence.\n",
        rec.secondary.label()
    );
}

fn planning_summary(out: &mut String, analysis: &LandUseAnalysis) {
    let Some(detail) = &analysis.detail else {
        return;
    };
    let _ = writeln!(out, "PLANNING DETAIL");
    let _ = writeln!(out, "{RULE}");
    match detail {
        PlanningDetail::Agriculture(plan) => {
            let crops: Vec<&str> = plan.recommended_crops.iter().map(|c| c.name).collect();
            let _ = writeln!(out, "  Recommended crops: {}", crops.join(", "));
            let _ = writeln!(
                out,
                "  Estimated yield:   {:.0} kg/year",
                plan.estimated_yield_kg_year
            );
            for note in &plan.climate_notes {
                let _ = writeln!(out, "  {note}");
            }
        }
        PlanningDetail::Residential(plan) => {
            let _ = writeln!(
                out,
                "  Capacity: {} houses, ~{} residents ({} in 10 years)",
                plan.capacity.max_houses,
                plan.capacity.estimated_population,
                plan.capacity.population_10_years
            );
            let _ = writeln!(
                out,
                "  Green target: {:.0} m2 ({:.0}% of site), {} trees to plant",
                plan.green_targets.recommended_green_area_m2,
                plan.green_targets.green_area_percent,
                plan.green_targets.additional_trees_needed
            );
            let _ = writeln!(out, "  Building height: {}", plan.seismic.max_floors);
        }
        PlanningDetail::GreenArea(plan) => {
            let _ = writeln!(
                out,
                "  Park for {} trees, {} picnic spots, {} parking spaces",
                plan.total_trees, plan.picnic_spots, plan.parking_spaces
            );
            let _ = writeln!(
                out,
                "  Absorbs {:.1} t CO2/year, produces {:.0} kg oxygen/year",
                plan.co2_absorption_tons_year, plan.oxygen_production_kg_year
            );
        }
        PlanningDetail::SolarEnergy(plan) => {
            let _ = writeln!(
                out,
                "  {:.2} MW over {:.0} m2 of panels, ~{:.0} MWh/year",
                plan.installed_capacity_mw, plan.panel_area_m2, plan.annual_production_mwh
            );
            let _ = writeln!(
                out,
                "  Powers ~{} homes, avoids {:.0} t CO2/year, payback ~{} years",
                plan.homes_powered, plan.co2_avoided_tons_year, plan.payback_period_years
            );
        }
        PlanningDetail::WindEnergy(plan) => {
            let _ = writeln!(
                out,
                "  {} turbine(s), {:.1} MW estimated capacity",
                plan.turbine_count, plan.estimated_capacity_mw
            );
            let _ = writeln!(out, "  {}", plan.measurement_note());
        }
    }
    let _ = writeln!(out);
}

fn afforestation(out: &mut String, analysis: &LandUseAnalysis) {
    let _ = writeln!(out, "TREE-PLANTING SUITABILITY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "  Score {}/100 ({:?})",
        analysis.afforestation.score, analysis.afforestation.level
    );
    let _ = writeln!(
        out,
        "  Suggested species: {}\n",
        analysis.afforestation.recommended_species.join(", ")
    );
}

fn swot_matrix(out: &mut String, swot: &SwotAnalysis) {
    let _ = writeln!(out, "SWOT ANALYSIS");
    let _ = writeln!(out, "{RULE}");
    let quadrant = |out: &mut String, title: &str, items: &[String]| {
        let _ = writeln!(out, "  [{title}]");
        for item in items {
            let _ = writeln!(out, "   - {item}");
        }
    };
    quadrant(out, "Strengths", &swot.strengths);
    quadrant(out, "Weaknesses", &swot.weaknesses);
    quadrant(out, "Opportunities", &swot.opportunities);
    quadrant(out, "Threats", &swot.threats);
}
