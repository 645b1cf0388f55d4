use super::{RatingInputs, RatingRule};

/// Wind speed rule.
///
/// Strong wind, on the top of the range (inclusive):
/// - >= 28 kt: -6
/// - >= 23 kt: -4
/// - >= 18 kt: -2
///
/// Too little wind, on the bottom of the range, applied on top of the above:
/// - < 5 kt: -2
/// - < 9 kt: -1
pub struct WindSpeedRule;

impl RatingRule for WindSpeedRule {
    fn id(&self) -> &'static str {
        "wind_speed"
    }

    fn adjustment(&self, inputs: &RatingInputs) -> i32 {
        let Some(range) = inputs.wind else {
            return 0;
        };

        let strong = match range.hi() {
            hi if hi >= 28 => -6,
            hi if hi >= 23 => -4,
            hi if hi >= 18 => -2,
            _ => 0,
        };

        let light = match range.lo() {
            lo if lo < 5 => -2,
            lo if lo < 9 => -1,
            _ => 0,
        };

        strong + light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KnotRange;

    fn adjust(lo: u32, hi: u32) -> i32 {
        let range = KnotRange::new(lo, hi);
        WindSpeedRule.adjustment(&RatingInputs {
            wind: Some(&range),
            ..Default::default()
        })
    }

    #[test]
    fn sweet_spot_is_free() {
        assert_eq!(adjust(9, 17), 0);
        assert_eq!(adjust(12, 15), 0);
    }

    #[test]
    fn strong_wind_thresholds_inclusive() {
        assert_eq!(adjust(10, 18), -2);
        assert_eq!(adjust(10, 23), -4);
        assert_eq!(adjust(10, 28), -6);
        assert_eq!(adjust(10, 35), -6);
    }

    #[test]
    fn light_wind_thresholds() {
        assert_eq!(adjust(4, 10), -2);
        assert_eq!(adjust(5, 10), -1);
        assert_eq!(adjust(8, 10), -1);
        assert_eq!(adjust(0, 0), -2);
    }

    #[test]
    fn both_ends_can_fire() {
        assert_eq!(adjust(3, 30), -8);
        assert_eq!(adjust(6, 24), -5);
    }
}
