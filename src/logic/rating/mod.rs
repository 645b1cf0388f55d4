pub mod engine;
pub mod sky;
pub mod waves;
pub mod wind;

pub use engine::{rate, RatingEngine};

use crate::models::{KnotRange, SkyDescriptor, WaveRange};

/// Fields a rating is computed from
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingInputs<'a> {
    pub wind: Option<&'a KnotRange>,
    pub waves: Option<&'a WaveRange>,
    pub sky: Option<&'a SkyDescriptor>,
}

impl RatingInputs<'_> {
    pub fn is_empty(&self) -> bool {
        self.wind.is_none() && self.waves.is_none() && self.sky.is_none()
    }
}

/// One additive adjustment to the base score
pub trait RatingRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Points added to (or taken from) the score; 0 when the rule has no input
    fn adjustment(&self, inputs: &RatingInputs) -> i32;
}
