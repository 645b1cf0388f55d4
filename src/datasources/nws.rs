use crate::config::NwsConfig;
use crate::error::{Result, SailcastError};
use crate::models::{GridForecastDocument, GridPeriod};
use serde::Deserialize;

/// Marine zone text products (TGFTP) and gridpoint forecasts (api.weather.gov)
pub struct NwsClient {
    client: reqwest::Client,
    config: NwsConfig,
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: String,
}

impl NwsClient {
    pub fn new(client: reqwest::Client, config: NwsConfig) -> Self {
        Self { client, config }
    }

    /// Zone products joined into one bulletin, each under a `===== ZONE =====`
    /// banner. Zones that fail are skipped; it is an error only when none load.
    pub async fn fetch_bulletin(&self, zones: &[String]) -> Result<String> {
        let mut parts = Vec::new();

        for zone in zones {
            match self.fetch_text_product(zone).await {
                Ok(text) => parts.push(format!(
                    "===== {} =====\n{}",
                    zone_banner(zone),
                    text.trim()
                )),
                Err(e) => tracing::warn!("Marine zone {}: {}", zone, e),
            }
        }

        if parts.is_empty() {
            return Err(SailcastError::DataSourceUnavailable(format!(
                "TGFTP: no text for zones {}",
                zones.join(", ")
            )));
        }
        Ok(parts.join("\n\n"))
    }

    /// One text product, relative to the configured TGFTP root
    pub async fn fetch_text_product(&self, rel_path: &str) -> Result<String> {
        let base = format!(
            "{}/{}",
            self.config.tgftp_root.trim_end_matches('/'),
            rel_path.trim_start_matches('/')
        );

        for url in text_product_urls(&base) {
            match self.get_text(&url).await {
                Ok(text) if !text.trim().is_empty() => return Ok(text),
                Ok(_) => tracing::debug!("Empty text product at {}", url),
                Err(e) => tracing::debug!("TGFTP {}: {}", url, e),
            }
        }

        Err(SailcastError::DataSourceUnavailable(format!(
            "TGFTP: {} not available",
            rel_path
        )))
    }

    /// Forecast periods for a point: `/points/{lat},{lon}` names the
    /// forecast URL, which holds the periods
    pub async fn fetch_grid_periods(&self, latitude: f64, longitude: f64) -> Result<Vec<GridPeriod>> {
        let points_url = points_url(&self.config.api_base, latitude, longitude);

        let points: PointsResponse = self.get_json(&points_url).await?;
        let forecast: GridForecastDocument = self.get_json(&points.properties.forecast).await?;

        tracing::debug!(
            "Gridpoint forecast for {:.4},{:.4}: {} periods",
            latitude,
            longitude,
            forecast.properties.periods.len()
        );
        Ok(forecast.properties.periods)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SailcastError::DataSourceUnavailable(format!("NWS: {}", e)))?;

        if !response.status().is_success() {
            return Err(SailcastError::DataSourceUnavailable(format!(
                "NWS returned {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/geo+json")
            .send()
            .await
            .map_err(|e| SailcastError::DataSourceUnavailable(format!("NWS API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SailcastError::DataSourceUnavailable(format!(
                "NWS API returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            SailcastError::DataSourceUnavailable(format!("Failed to parse NWS API response: {}", e))
        })
    }
}

/// The product URL as given, without a trailing slash, then with one
fn text_product_urls(base: &str) -> Vec<String> {
    let trimmed = base.trim_end_matches('/');
    let mut urls: Vec<String> = Vec::with_capacity(3);
    for url in [base.to_string(), trimmed.to_string(), format!("{}/", trimmed)] {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// The points endpoint only accepts four decimal places
fn points_url(api_base: &str, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/points/{:.4},{:.4}",
        api_base.trim_end_matches('/'),
        latitude,
        longitude
    )
}

/// "marine/coastal/anz/anz338.txt" -> "ANZ338"
fn zone_banner(zone: &str) -> String {
    let file = zone.rsplit('/').next().unwrap_or(zone);
    file.trim_end_matches(".txt").to_uppercase()
}
