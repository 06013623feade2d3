use clap::Parser;
use landplan_core::{analyze, render_report, EnvironmentalRecord, FireRiskLevel, FloodRisk, GeoPoint};
use tracing_subscriber::EnvFilter;

/// Land-use suitability demo with configurable observations
///
/// Stands in for the HTTP collaborator layer: every observation the real
/// system would fetch from an external provider is supplied as a flag, and
/// omitted flags exercise the engine's missing-data behavior.
#[derive(Parser, Debug)]
#[command(name = "landplan-demo")]
#[command(about = "Land-use suitability analysis demo", long_about = None)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long)]
    lon: f64,

    /// Site area in m²
    #[arg(short, long, default_value_t = 10_000.0)]
    area_size: f64,

    /// Vegetation index in [0,1]
    #[arg(short, long)]
    vegetation_index: Option<f64>,

    /// Air temperature in °C (-999 means invalid, like the upstream feed)
    #[arg(short = 't', long)]
    air_temp: Option<f64>,

    /// Elevation in meters
    #[arg(short, long)]
    elevation: Option<f64>,

    /// Precipitation in mm/day
    #[arg(short, long)]
    precipitation: Option<f64>,

    /// Solar radiation in W/m²
    #[arg(short, long)]
    solar_radiation: Option<f64>,

    /// Root-zone soil moisture in percent
    #[arg(short = 'm', long)]
    soil_moisture: Option<f64>,

    /// Active-fire detections near the site
    #[arg(short, long, default_value_t = 0)]
    fire_count: u32,

    /// Override the derived fire risk level (low, medium, high)
    #[arg(long)]
    fire_risk: Option<String>,

    /// Override the derived flood risk label (low, moderate, high, unknown)
    #[arg(long)]
    flood_risk: Option<String>,

    /// Emit the full analysis as JSON instead of the narrative report
    #[arg(short, long)]
    json: bool,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    let mut record = EnvironmentalRecord::empty(GeoPoint::new(args.lat, args.lon));
    record.vegetation_index = args.vegetation_index;
    record.air_temp_c = args.air_temp;
    record.elevation_m = args.elevation;
    record.precipitation_mm_day = args.precipitation;
    record.solar_radiation_wm2 = args.solar_radiation;
    record.root_zone_moisture_pct = args.soil_moisture;
    record.fire_count = args.fire_count;

    record.fire_risk = match args.fire_risk.as_deref() {
        Some("low") => FireRiskLevel::Low,
        Some("medium") => FireRiskLevel::Medium,
        Some("high") => FireRiskLevel::High,
        Some(other) => {
            println!("Unknown fire risk '{}', deriving from fire count", other);
            FireRiskLevel::from_count(args.fire_count)
        }
        None => FireRiskLevel::from_count(args.fire_count),
    };

    // The elevation source always labels flood risk; do the same here
    // unless the flag overrides it.
    record.flood_risk = match args.flood_risk.as_deref() {
        Some("low") => Some(FloodRisk::Low),
        Some("moderate") => Some(FloodRisk::Moderate),
        Some("high") => Some(FloodRisk::High),
        Some("unknown") => Some(FloodRisk::Unknown),
        Some(other) => {
            println!("Unknown flood risk '{}', deriving from elevation", other);
            args.elevation.map(FloodRisk::from_elevation)
        }
        None => args.elevation.map(FloodRisk::from_elevation),
    };

    let analysis = analyze(&record, args.area_size);

    if args.json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to serialize analysis: {err}"),
        }
    } else {
        println!("{}", render_report(&analysis, &record));
    }
}
