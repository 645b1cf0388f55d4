use super::{RatingInputs, RatingRule};

/// Wave height penalty, judged on the top of the band.
///
/// - > 5 ft: -6
/// - > 4 ft: -4
/// - > 3 ft: -2
pub struct WaveHeightRule;

impl RatingRule for WaveHeightRule {
    fn id(&self) -> &'static str {
        "wave_height"
    }

    fn adjustment(&self, inputs: &RatingInputs) -> i32 {
        let Some(waves) = inputs.waves else {
            return 0;
        };

        let high = waves.hi().max(waves.lo());
        if high > 5.0 {
            -6
        } else if high > 4.0 {
            -4
        } else if high > 3.0 {
            -2
        } else {
            0
        }
    }
}
