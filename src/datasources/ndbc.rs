use crate::config::NdbcConfig;
use crate::error::{Result, SailcastError};
use crate::models::ObservationSample;

/// NDBC realtime buoy and C-MAN station feed
pub struct NdbcClient {
    client: reqwest::Client,
    config: NdbcConfig,
}

impl NdbcClient {
    pub fn new(client: reqwest::Client, config: NdbcConfig) -> Self {
        Self { client, config }
    }

    /// Newest reading for a station
    pub async fn fetch_latest(&self, station: &str) -> Result<ObservationSample> {
        let url = self.config.station_url(station);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SailcastError::DataSourceUnavailable(format!("NDBC: {}", e)))?;

        if !response.status().is_success() {
            return Err(SailcastError::DataSourceUnavailable(format!(
                "NDBC returned {} for {}",
                response.status(),
                station
            )));
        }

        let text = response.text().await?;
        ObservationSample::from_realtime_text(station, &text).ok_or_else(|| {
            SailcastError::InvalidData(format!("NDBC {}: no usable reading", station))
        })
    }
}
