use super::{RatingInputs, RatingRule};

/// Sky bonus/penalty by substring; all matching terms apply.
///
/// - "sunny"/"clear": +1
/// - "storm"/"thunder": -5
/// - "showers"/"rain": -2
pub struct SkyRule;

const TERMS: [(&[&str], i32); 3] = [
    (&["sunny", "clear"], 1),
    (&["storm", "thunder"], -5),
    (&["showers", "rain"], -2),
];

impl RatingRule for SkyRule {
    fn id(&self) -> &'static str {
        "sky"
    }

    fn adjustment(&self, inputs: &RatingInputs) -> i32 {
        let Some(sky) = inputs.sky else {
            return 0;
        };

        TERMS
            .iter()
            .filter(|(words, _)| sky.contains_any(words))
            .map(|(_, delta)| delta)
            .sum()
    }
}
