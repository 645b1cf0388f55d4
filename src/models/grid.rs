use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One period of an NWS gridpoint forecast (`properties.periods[]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPeriod {
    #[serde(default)]
    pub name: String,
    /// ISO-8601 with offset, e.g. "2025-08-15T18:00:00-05:00"
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub short_forecast: Option<String>,
    #[serde(default)]
    pub detailed_forecast: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<String>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub temperature: Option<i32>,
}

impl GridPeriod {
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.start_time.trim()).ok()
    }

    /// Calendar date of the period start in its own offset
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start().map(|dt| dt.date_naive())
    }

    /// Short forecast, falling back to the detailed one
    pub fn forecast_text(&self) -> Option<&str> {
        [&self.short_forecast, &self.detailed_forecast]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.trim().is_empty())
    }
}

/// Gridpoint forecast document; only the periods are consumed
#[derive(Debug, Deserialize)]
pub struct GridForecastDocument {
    pub properties: GridForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct GridForecastProperties {
    #[serde(default)]
    pub periods: Vec<GridPeriod>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GridJson {
    Document(GridForecastDocument),
    Periods(Vec<GridPeriod>),
}

/// Periods from either a full forecast document or a bare `periods` array
pub fn periods_from_json(json: &str) -> serde_json::Result<Vec<GridPeriod>> {
    Ok(match serde_json::from_str::<GridJson>(json)? {
        GridJson::Document(doc) => doc.properties.periods,
        GridJson::Periods(periods) => periods,
    })
}
