use super::{sky::SkyRule, waves::WaveHeightRule, wind::WindSpeedRule, RatingInputs, RatingRule};
use crate::models::{SkyDescriptor, WaveRange, WindEstimate};
use once_cell::sync::Lazy;

/// Score before any rule applies
const BASE_SCORE: i32 = 10;

/// Score when there is no wind, wave or sky signal at all
pub const NEUTRAL_RATING: u8 = 5;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

static DEFAULT_ENGINE: Lazy<RatingEngine> = Lazy::new(RatingEngine::new);

pub struct RatingEngine {
    rules: Vec<Box<dyn RatingRule>>,
}

impl RatingEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RatingRule>> = vec![
            Box::new(WaveHeightRule),
            Box::new(WindSpeedRule),
            Box::new(SkyRule),
        ];

        Self { rules }
    }

    /// Every rule is consulted; adjustments add up, then clamp to 1-10
    pub fn evaluate(&self, inputs: &RatingInputs) -> u8 {
        if inputs.is_empty() {
            return NEUTRAL_RATING;
        }

        let score: i32 = BASE_SCORE
            + self
                .rules
                .iter()
                .map(|rule| rule.adjustment(inputs))
                .sum::<i32>();

        score.clamp(MIN_RATING as i32, MAX_RATING as i32) as u8
    }

    /// Per-rule adjustments, in evaluation order
    pub fn breakdown(&self, inputs: &RatingInputs) -> Vec<(&'static str, i32)> {
        self.rules
            .iter()
            .map(|rule| (rule.id(), rule.adjustment(inputs)))
            .collect()
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rating from extracted fields. Only the wind speed counts; a bearing on
/// its own is no signal.
pub fn rate(
    wind: Option<&WindEstimate>,
    waves: Option<&WaveRange>,
    sky: Option<&SkyDescriptor>,
) -> u8 {
    DEFAULT_ENGINE.evaluate(&RatingInputs {
        wind: wind.and_then(|w| w.speed.as_ref()),
        waves,
        sky,
    })
}
