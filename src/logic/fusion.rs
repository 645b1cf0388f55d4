use super::units::whole_knots;
use crate::models::{CompassPoint, KnotRange, ObservationSample, WindEstimate};

/// How far the observed speed may sit from the forecast midpoint before the
/// forecast range is widened to include it
const DISAGREEMENT_KT: u32 = 4;

/// Half-width of the band built around a lone observation
const OBSERVATION_BAND_KT: u32 = 1;

/// Blend a live buoy reading into a forecast wind estimate.
///
/// A textual bearing is never replaced; a missing one is filled from the
/// buoy. Readings without a wind speed leave the estimate untouched.
pub fn fuse_observation(prior: Option<WindEstimate>, sample: &ObservationSample) -> WindEstimate {
    let prior = prior.unwrap_or_default();

    let Some(observed_kt) = sample.wind_speed_kt() else {
        return prior;
    };
    let observed = whole_knots(observed_kt);

    let speed = match prior.speed {
        Some(range) => {
            if range.midpoint().abs_diff(observed) >= DISAGREEMENT_KT {
                tracing::debug!(
                    "Buoy {} reads {} kt against forecast {}-{} kt, widening",
                    sample.station,
                    observed,
                    range.lo(),
                    range.hi()
                );
                range.widen_to(observed)
            } else {
                range
            }
        }
        None => KnotRange::new(
            observed.saturating_sub(OBSERVATION_BAND_KT),
            observed.saturating_add(OBSERVATION_BAND_KT),
        ),
    };

    let bearing = prior.bearing.or_else(|| {
        sample
            .wind_direction_deg
            .and_then(CompassPoint::from_degrees)
    });

    WindEstimate::new(bearing, Some(speed))
}
