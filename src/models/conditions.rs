use super::{PeriodLabel, SkyDescriptor, WaveRange, WindEstimate};
use crate::logic::extract::is_severe;
use serde::{Deserialize, Serialize};

/// Which input the extracted fields came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionsSource {
    Bulletin,
    Grid,
    Unavailable,
}

impl ConditionsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionsSource::Bulletin => "Marine bulletin",
            ConditionsSource::Grid => "Gridpoint forecast",
            ConditionsSource::Unavailable => "No forecast",
        }
    }
}

impl std::fmt::Display for ConditionsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Conditions for one (location, label) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsResult {
    /// 1-10, 5 when nothing was found
    pub rating: u8,
    pub wind: WindEstimate,
    pub waves: Option<WaveRange>,
    pub sky: Option<SkyDescriptor>,
    /// Raw span checked for hazard keywords; not meant for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_text: Option<String>,
    pub is_maritime_advisory: bool,
    /// Label actually used, which may differ from the one requested
    pub label: PeriodLabel,
    pub source: ConditionsSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_f: Option<i32>,
}

impl ConditionsResult {
    /// Severe if the hazard span, or failing that the sky phrase, has a hazard keyword
    pub fn is_severe(&self) -> bool {
        match (&self.hazard_text, &self.sky) {
            (Some(text), _) if !text.is_empty() => is_severe(text),
            (_, Some(sky)) => is_severe(sky.as_str()),
            _ => false,
        }
    }
}
