pub mod ndbc;
pub mod nws;

pub use ndbc::NdbcClient;
pub use nws::NwsClient;

use crate::config::NwsConfig;
use crate::error::Result;
use std::time::Duration;

/// Shared HTTP client; NWS asks every caller to identify itself
pub fn http_client(config: &NwsConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
