//! Gridpoint forecast periods: picking the period for a label and reading
//! its wind phrases.

use super::units::mph_to_knots;
use crate::models::{CompassPoint, GridPeriod, KnotRange, PeriodLabel, WindEstimate};
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static MPH_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\D+(\d{1,2})\s*mph").expect("mph range pattern"));

static MPH_SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*mph").expect("mph single pattern"));

/// Daypart names preferred for present-day labels, in priority order
const TODAY_NAME_PREFERENCE: [&str; 4] = ["today", "this afternoon", "this morning", "this evening"];

/// Calendar date a label refers to, and whether it means "rest of today"
pub fn target_date(label: PeriodLabel, today: NaiveDate) -> (NaiveDate, bool) {
    match label {
        PeriodLabel::Tomorrow => (today + Duration::days(1), false),
        PeriodLabel::Weekday(day) => {
            let ahead = (7 + day.num_days_from_monday() as i64
                - today.weekday().num_days_from_monday() as i64)
                % 7;
            (today + Duration::days(ahead), false)
        }
        _ => (today, true),
    }
}

/// Best period for `label`, never reordering the source sequence.
///
/// Periods whose start time does not parse are skipped.
pub fn resolve_period(
    periods: &[GridPeriod],
    label: PeriodLabel,
    today: NaiveDate,
) -> Option<&GridPeriod> {
    let (target, todayish) = target_date(label, today);

    let same_day: Vec<&GridPeriod> = periods
        .iter()
        .filter(|p| p.start_date() == Some(target))
        .collect();

    if same_day.is_empty() {
        tracing::debug!("No grid period starts on {}", target);
        return None;
    }

    if todayish {
        for preferred in TODAY_NAME_PREFERENCE {
            let hit = same_day.iter().find(|p| {
                let name = p.name.trim().to_lowercase();
                if preferred == "today" {
                    name == "today"
                } else {
                    name.contains(preferred)
                }
            });
            if let Some(period) = hit {
                return Some(*period);
            }
        }
    }

    same_day.first().copied()
}

/// Knot range from a grid wind phrase such as "10 to 15 mph",
/// "around 5 mph" or "light and variable"
pub fn wind_speed_from_phrase(phrase: &str) -> Option<KnotRange> {
    let text = phrase.trim().to_lowercase();

    if let Some(caps) = MPH_RANGE_RE.captures(&text) {
        if let (Ok(lo), Ok(hi)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            return Some(KnotRange::new(mph_to_knots(lo), mph_to_knots(hi)));
        }
    }

    if let Some(caps) = MPH_SINGLE_RE.captures(&text) {
        if let Ok(mph) = caps[1].parse::<u32>() {
            let kt = mph_to_knots(mph);
            return Some(KnotRange::new(kt.saturating_sub(1), kt + 1));
        }
    }

    if ["light", "variable", "calm"].iter().any(|w| text.contains(w)) {
        return Some(KnotRange::new(0, 5));
    }

    None
}

/// Wind estimate for a grid period from its speed and direction phrases
pub fn wind_from_period(period: &GridPeriod) -> WindEstimate {
    let speed = period
        .wind_speed
        .as_deref()
        .and_then(wind_speed_from_phrase);
    let bearing = period
        .wind_direction
        .as_deref()
        .and_then(CompassPoint::from_str);
    WindEstimate::new(bearing, speed)
}
