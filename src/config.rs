use crate::error::{Result, SailcastError};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub nws: NwsConfig,
    #[serde(default)]
    pub ndbc: NdbcConfig,
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
    /// Location keys rated when none are selected on the command line
    #[serde(default)]
    pub default_locations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NwsConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Root of the text-product tree; `marine_zones` paths are relative to it
    #[serde(default = "default_tgftp_root")]
    pub tgftp_root: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    "sailcast/0.1 (contact: you@example.com)".into()
}

fn default_tgftp_root() -> String {
    "https://tgftp.nws.noaa.gov/data/forecasts".into()
}

fn default_api_base() -> String {
    "https://api.weather.gov".into()
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            tgftp_root: default_tgftp_root(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NdbcConfig {
    /// URL template; `{station}` is replaced with the station id
    #[serde(default = "default_realtime_url")]
    pub realtime_url: String,
}

fn default_realtime_url() -> String {
    "https://www.ndbc.noaa.gov/data/realtime2/{station}.txt".into()
}

impl Default for NdbcConfig {
    fn default() -> Self {
        Self {
            realtime_url: default_realtime_url(),
        }
    }
}

impl NdbcConfig {
    pub fn station_url(&self, station: &str) -> String {
        self.realtime_url.replace("{station}", station)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub key: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Sailing spot rated from marine zone text rather than land forecasts
    #[serde(default)]
    pub maritime: bool,
    #[serde(default)]
    pub marine_zones: Vec<String>,
    #[serde(default)]
    pub buoy_station: Option<String>,
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SailcastError::Config(format!(
                "Config file not found at {:?}. Copy config/config.yaml.example to get started.",
                config_path
            )));
        }

        Self::from_path(&config_path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| SailcastError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = dirs::config_dir()
            .ok_or_else(|| SailcastError::Config("Cannot determine config directory".into()))?
            .join("sailcast")
            .join("config.yaml");
        Ok(default_path)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for location in &self.locations {
            if location.key.trim().is_empty() {
                return Err(SailcastError::Config("Location with empty key".into()));
            }
            if !seen.insert(location.key.as_str()) {
                return Err(SailcastError::Config(format!(
                    "Duplicate location key '{}'",
                    location.key
                )));
            }
        }
        for key in &self.default_locations {
            if self.location(key).is_none() {
                return Err(SailcastError::Config(format!(
                    "default_locations names unknown location '{}'",
                    key
                )));
            }
        }
        Ok(())
    }

    pub fn location(&self, key: &str) -> Option<&LocationConfig> {
        self.locations
            .iter()
            .find(|l| l.key.eq_ignore_ascii_case(key))
    }

    /// Locations for the given keys, or the defaults (then every location)
    /// when no keys are given
    pub fn select(&self, keys: &[String]) -> Result<Vec<&LocationConfig>> {
        if keys.is_empty() {
            if self.default_locations.is_empty() {
                return Ok(self.locations.iter().collect());
            }
            return self.select(&self.default_locations);
        }

        keys.iter()
            .map(|key| {
                self.location(key).ok_or_else(|| {
                    SailcastError::Config(format!("Unknown location '{}'", key))
                })
            })
            .collect()
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        for cap in ENV_VAR_RE.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}
