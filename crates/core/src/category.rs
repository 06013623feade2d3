use serde::{Deserialize, Serialize};

/// Candidate land-use categories evaluated for every site.
///
/// Declaration order doubles as the tie-break order when two categories
/// score equally: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandUse {
    Agriculture,
    Residential,
    GreenArea,
    SolarEnergy,
    WindEnergy,
    Tourism,
    Geothermal,
}

impl LandUse {
    /// All categories in declaration (tie-break) order.
    pub const ALL: [LandUse; 7] = [
        LandUse::Agriculture,
        LandUse::Residential,
        LandUse::GreenArea,
        LandUse::SolarEnergy,
        LandUse::WindEnergy,
        LandUse::Tourism,
        LandUse::Geothermal,
    ];

    /// Stable wire key shared with every downstream consumer.
    pub fn key(self) -> &'static str {
        match self {
            LandUse::Agriculture => "agriculture",
            LandUse::Residential => "residential",
            LandUse::GreenArea => "green_area",
            LandUse::SolarEnergy => "solar_energy",
            LandUse::WindEnergy => "wind_energy",
            LandUse::Tourism => "tourism",
            LandUse::Geothermal => "geothermal",
        }
    }

    /// Human-readable label for reports.
    pub fn label(self) -> &'static str {
        match self {
            LandUse::Agriculture => "Agriculture",
            LandUse::Residential => "Residential",
            LandUse::GreenArea => "Green Area / Park",
            LandUse::SolarEnergy => "Solar Energy",
            LandUse::WindEnergy => "Wind Energy",
            LandUse::Tourism => "Tourism",
            LandUse::Geothermal => "Geothermal Energy",
        }
    }
}
