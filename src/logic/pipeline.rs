//! Reduces already-fetched inputs for one location to a `ConditionsResult`.
//!
//! Bulletin text is tried first. When it yields no wind speed, waves or sky,
//! the gridpoint periods are used instead. A buoy reading, if any, is then
//! blended into the wind before rating.

use super::extract::{extract_sky, extract_waves, extract_wind};
use super::fusion::fuse_observation;
use super::grid::{resolve_period, wind_from_period};
use super::rating::rate;
use super::section::locate_with_fallback;
use crate::models::{
    ConditionsResult, ConditionsSource, GridPeriod, ObservationSample, PeriodLabel,
    SkyDescriptor, WaveRange, WindEstimate,
};
use chrono::NaiveDate;

/// Inputs for one location; any of them may be missing
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionsInputs<'a> {
    pub bulletin: Option<&'a str>,
    pub grid: Option<&'a [GridPeriod]>,
    pub observation: Option<&'a ObservationSample>,
    /// Location is a sailing/marine spot
    pub maritime: bool,
}

#[derive(Debug, Default)]
struct Fields {
    wind: WindEstimate,
    waves: Option<WaveRange>,
    sky: Option<SkyDescriptor>,
    hazard_text: Option<String>,
    temperature_f: Option<i32>,
}

impl Fields {
    fn has_signal(&self) -> bool {
        self.wind.speed.is_some() || self.waves.is_some() || self.sky.is_some()
    }
}

pub fn assess(
    inputs: &ConditionsInputs,
    label: PeriodLabel,
    today: NaiveDate,
) -> ConditionsResult {
    let mut resolved_label = label;
    let mut source = ConditionsSource::Unavailable;
    let mut fields = Fields::default();

    if let Some(bulletin) = inputs.bulletin.filter(|t| !t.trim().is_empty()) {
        match locate_with_fallback(bulletin, label) {
            Some(section) => {
                let text = section.body();
                fields.wind = extract_wind(text);
                fields.waves = extract_waves(text);
                fields.sky = extract_sky(text);
                fields.hazard_text = Some(section.text.clone());
                resolved_label = section.label;
                if fields.has_signal() {
                    source = ConditionsSource::Bulletin;
                }
            }
            None => {
                tracing::debug!("No bulletin section for {}", label.heading());
                fields.hazard_text = Some(bulletin.to_string());
            }
        }
    }

    if !fields.has_signal() {
        if let Some(period) = inputs
            .grid
            .and_then(|periods| resolve_period(periods, label, today))
        {
            tracing::debug!("Using grid period '{}'", period.name);
            let forecast = period.forecast_text();
            fields = Fields {
                wind: wind_from_period(period),
                waves: None,
                sky: period
                    .short_forecast
                    .as_deref()
                    .and_then(extract_sky)
                    .or_else(|| period.detailed_forecast.as_deref().and_then(extract_sky)),
                hazard_text: forecast.map(str::to_string),
                temperature_f: period.temperature,
            };
            resolved_label = label;
            source = ConditionsSource::Grid;
        }
    }

    if let Some(sample) = inputs.observation {
        if sample.wind_speed_ms.is_some() {
            let prior = (!fields.wind.is_empty()).then_some(fields.wind);
            fields.wind = fuse_observation(prior, sample);
        }
    }

    let rating = rate(Some(&fields.wind), fields.waves.as_ref(), fields.sky.as_ref());

    ConditionsResult {
        rating,
        wind: fields.wind,
        waves: fields.waves,
        sky: fields.sky,
        hazard_text: fields.hazard_text,
        is_maritime_advisory: inputs.maritime,
        label: resolved_label,
        source,
        temperature_f: fields.temperature_f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompassPoint, KnotRange};
    use chrono::Weekday;

    const BULLETIN: &str = "\
.TODAY...SW winds 10 to 15 kt. Waves 1 to 2 ft. Sunny.
.TONIGHT...W winds 5 to 10 kt. Waves 1 ft or less.
.SATURDAY...N winds 20 to 25 kt. Waves 4 to 6 ft. Showers likely.
";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    fn grid() -> Vec<GridPeriod> {
        vec![
            GridPeriod {
                name: "This Afternoon".into(),
                start_time: "2025-08-15T14:00:00-05:00".into(),
                short_forecast: Some("Chance Rain Showers".into()),
                wind_speed: Some("10 to 15 mph".into()),
                wind_direction: Some("S".into()),
                temperature: Some(78),
                ..Default::default()
            },
            GridPeriod {
                name: "Saturday".into(),
                start_time: "2025-08-16T06:00:00-05:00".into(),
                short_forecast: Some("Mostly Sunny".into()),
                wind_speed: Some("5 mph".into()),
                wind_direction: Some("NW".into()),
                temperature: Some(81),
                ..Default::default()
            },
        ]
    }

    fn buoy(speed_ms: f64, deg: f64) -> ObservationSample {
        ObservationSample {
            station: "CHII2".into(),
            year: 2025,
            month: 8,
            day: 15,
            hour: 18,
            minute: 0,
            wind_direction_deg: Some(deg),
            wind_speed_ms: Some(speed_ms),
            wind_gust_ms: None,
        }
    }

    #[test]
    fn nothing_at_all_is_neutral() {
        let result = assess(&ConditionsInputs::default(), PeriodLabel::Today, today());
        assert_eq!(result.rating, 5);
        assert!(result.wind.is_empty());
        assert!(result.waves.is_none());
        assert!(result.sky.is_none());
        assert_eq!(result.source, ConditionsSource::Unavailable);
        assert_eq!(result.label, PeriodLabel::Today);
    }

    #[test]
    fn bulletin_today() {
        let inputs = ConditionsInputs {
            bulletin: Some(BULLETIN),
            maritime: true,
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert_eq!(result.source, ConditionsSource::Bulletin);
        assert_eq!(result.wind.bearing, Some(CompassPoint::SW));
        assert_eq!(result.wind.speed, Some(KnotRange::new(10, 15)));
        assert_eq!(result.waves, Some(WaveRange::new(1.0, 2.0)));
        assert_eq!(result.sky, Some(SkyDescriptor::new("sunny")));
        assert_eq!(result.rating, 10);
        assert!(result.is_maritime_advisory);
        assert!(!result.is_severe());
    }

    #[test]
    fn bulletin_weekday() {
        let inputs = ConditionsInputs {
            bulletin: Some(BULLETIN),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Weekday(Weekday::Sat), today());
        assert_eq!(result.wind.speed, Some(KnotRange::new(20, 25)));
        assert_eq!(result.waves, Some(WaveRange::new(4.0, 6.0)));
        // 10 - 6 (waves) - 4 (wind) - 2 (showers)
        assert_eq!(result.rating, 1);
    }

    #[test]
    fn present_day_fallback_reports_label_used() {
        let inputs = ConditionsInputs {
            bulletin: Some(".REST OF TODAY...E winds 10 kt. Waves 2 ft.\n.TONIGHT...Calm."),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert_eq!(result.label, PeriodLabel::RestOfToday);
        assert_eq!(result.wind.speed, Some(KnotRange::single(10)));
    }

    #[test]
    fn grid_used_when_bulletin_has_nothing() {
        let periods = grid();
        let inputs = ConditionsInputs {
            bulletin: Some(BULLETIN),
            grid: Some(&periods),
            ..Default::default()
        };
        // Bulletin has no SUNDAY section and no fallback for weekdays; grid
        // has no Sunday period either
        let result = assess(&inputs, PeriodLabel::Weekday(Weekday::Sun), today());
        assert_eq!(result.source, ConditionsSource::Unavailable);
        assert_eq!(result.rating, 5);
        assert_eq!(result.hazard_text.as_deref(), Some(BULLETIN));

        let inputs = ConditionsInputs {
            grid: Some(&periods),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Tomorrow, today());
        assert_eq!(result.source, ConditionsSource::Grid);
        assert_eq!(result.wind.bearing, Some(CompassPoint::NW));
        assert_eq!(result.wind.speed, Some(KnotRange::new(3, 5)));
        assert_eq!(result.sky, Some(SkyDescriptor::new("mostly sunny")));
        assert_eq!(result.temperature_f, Some(81));
        assert!(result.waves.is_none());
        // 10 - 2 (light wind) + 1 (sun)
        assert_eq!(result.rating, 9);
    }

    #[test]
    fn empty_section_falls_through_to_grid() {
        let periods = grid();
        for bulletin in [
            ".TODAY...Patchy fog.\n.TONIGHT...W winds 10 kt.\n",
            ".REST OF TODAY...Patchy fog.\n.TONIGHT...W winds 10 kt.\n",
        ] {
            let inputs = ConditionsInputs {
                bulletin: Some(bulletin),
                grid: Some(&periods),
                maritime: true,
                ..Default::default()
            };
            let result = assess(&inputs, PeriodLabel::Today, today());
            assert_eq!(result.source, ConditionsSource::Grid);
            assert_eq!(result.label, PeriodLabel::Today);
            assert_eq!(result.wind.bearing, Some(CompassPoint::S));
            assert_eq!(result.wind.speed, Some(KnotRange::new(9, 13)));
            assert_eq!(result.sky, Some(SkyDescriptor::new("rain")));
            assert_eq!(result.temperature_f, Some(78));
            assert_eq!(result.hazard_text.as_deref(), Some("Chance Rain Showers"));
            assert!(result.is_maritime_advisory);
        }
    }

    #[test]
    fn grid_today_sky_and_hazard_text() {
        let periods = grid();
        let inputs = ConditionsInputs {
            grid: Some(&periods),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert_eq!(result.sky, Some(SkyDescriptor::new("rain")));
        assert_eq!(result.wind.speed, Some(KnotRange::new(9, 13)));
        assert_eq!(result.hazard_text.as_deref(), Some("Chance Rain Showers"));
        // 10 - 2 (rain)
        assert_eq!(result.rating, 8);
    }

    #[test]
    fn buoy_widens_bulletin_wind() {
        let b = buoy(12.0, 200.0); // 23.3 kt
        let inputs = ConditionsInputs {
            bulletin: Some(BULLETIN),
            observation: Some(&b),
            maritime: true,
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert_eq!(result.wind.speed, Some(KnotRange::new(10, 23)));
        assert_eq!(result.wind.bearing, Some(CompassPoint::SW));
        // 10 - 4 (wind hi 23) + 1 (sunny)
        assert_eq!(result.rating, 7);
    }

    #[test]
    fn buoy_alone_supplies_wind() {
        let b = buoy(5.0, 90.0); // 9.7 kt
        let inputs = ConditionsInputs {
            observation: Some(&b),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert_eq!(result.wind.speed, Some(KnotRange::new(9, 11)));
        assert_eq!(result.wind.bearing, Some(CompassPoint::E));
        assert_eq!(result.rating, 10);
    }

    #[test]
    fn severe_section_flagged() {
        let inputs = ConditionsInputs {
            bulletin: Some(".TODAY...GALE WARNING. NW winds 30 to 35 kt. Waves 8 to 12 ft.\n"),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert!(result.is_severe());
        assert_eq!(result.rating, 1);
    }

    #[test]
    fn blank_bulletin_is_ignored() {
        let inputs = ConditionsInputs {
            bulletin: Some("   \n"),
            ..Default::default()
        };
        let result = assess(&inputs, PeriodLabel::Today, today());
        assert!(result.hazard_text.is_none());
        assert_eq!(result.rating, 5);
    }
}
