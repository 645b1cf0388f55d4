mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LocationConfig};
use datasources::{NdbcClient, NwsClient};
use logic::rating::RatingInputs;
use logic::section::present_day_label;
use logic::{assess, ConditionsInputs, RatingEngine};
use models::{periods_from_json, ConditionsResult, GridPeriod, ObservationSample, PeriodLabel};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Everything fetched for one location; a failed fetch is simply absent
#[derive(Default)]
struct LiveInputs {
    bulletin: Option<String>,
    grid: Option<Vec<GridPeriod>>,
    observation: Option<ObservationSample>,
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "warn,sailcast=debug",
        _ => "warn,sailcast=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Rate { label, only, json } => run_rate(cli.config, &label, &only, json).await,
        Commands::Parse {
            label,
            bulletin,
            grid,
            buoy,
            maritime,
            json,
        } => run_parse(&label, bulletin, grid, buoy, maritime, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn parse_label(label: &str) -> anyhow::Result<PeriodLabel> {
    PeriodLabel::from_str(label).with_context(|| format!("Unknown period label '{}'", label))
}

async fn run_rate(
    config_path: Option<PathBuf>,
    label: &str,
    only: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let requested = parse_label(label)?;
    let config = Config::load(config_path)?;
    let locations = config.select(only)?;
    if locations.is_empty() {
        anyhow::bail!("No locations configured");
    }

    let http = datasources::http_client(&config.nws)?;
    let nws = NwsClient::new(http.clone(), config.nws.clone());
    let ndbc = NdbcClient::new(http, config.ndbc.clone());
    let today = chrono::Local::now().date_naive();

    for location in locations {
        let inputs = fetch_location(&nws, &ndbc, location).await;

        if let Some(obs) = &inputs.observation {
            tracing::debug!(
                "{}: buoy {} at {:?} reads {:?} kt, gust {:?} kt",
                location.key,
                obs.station,
                obs.observed_at(),
                obs.wind_speed_kt(),
                obs.wind_gust_kt()
            );
        }

        let label = match (requested, inputs.bulletin.as_deref()) {
            (PeriodLabel::Today, Some(bulletin)) => present_day_label(bulletin),
            _ => requested,
        };

        let result = assess(
            &ConditionsInputs {
                bulletin: inputs.bulletin.as_deref(),
                grid: inputs.grid.as_deref(),
                observation: inputs.observation.as_ref(),
                maritime: location.maritime,
            },
            label,
            today,
        );

        report(&location.key, &location.label, &result, json)?;
    }

    Ok(())
}

/// Bulletin, grid and buoy requests for one location run concurrently
async fn fetch_location(nws: &NwsClient, ndbc: &NdbcClient, location: &LocationConfig) -> LiveInputs {
    let bulletin = async {
        if location.marine_zones.is_empty() {
            return None;
        }
        logged(
            &location.key,
            "marine bulletin",
            nws.fetch_bulletin(&location.marine_zones).await,
        )
    };

    let grid = async {
        logged(
            &location.key,
            "gridpoint forecast",
            nws.fetch_grid_periods(location.latitude, location.longitude)
                .await,
        )
    };

    let observation = async {
        let station = location.buoy_station.as_deref()?;
        logged(&location.key, "buoy", ndbc.fetch_latest(station).await)
    };

    let (bulletin, grid, observation) = tokio::join!(bulletin, grid, observation);
    LiveInputs {
        bulletin,
        grid,
        observation,
    }
}

fn logged<T>(key: &str, what: &str, result: error::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{}: {} unavailable: {}", key, what, e);
            None
        }
    }
}

fn run_parse(
    label: &str,
    bulletin: Option<PathBuf>,
    grid: Option<PathBuf>,
    buoy: Option<PathBuf>,
    maritime: bool,
    json: bool,
) -> anyhow::Result<()> {
    let label = parse_label(label)?;

    let bulletin = bulletin.as_deref().map(read_file).transpose()?;

    let grid = grid
        .as_deref()
        .map(|path| -> anyhow::Result<Vec<GridPeriod>> {
            let text = read_file(path)?;
            periods_from_json(&text)
                .with_context(|| format!("Failed to parse grid forecast {}", path.display()))
        })
        .transpose()?;

    let observation = buoy
        .as_deref()
        .map(|path| -> anyhow::Result<ObservationSample> {
            let text = read_file(path)?;
            let station = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_uppercase())
                .unwrap_or_default();
            ObservationSample::from_realtime_text(&station, &text)
                .with_context(|| format!("No usable reading in {}", path.display()))
        })
        .transpose()?;

    let result = assess(
        &ConditionsInputs {
            bulletin: bulletin.as_deref(),
            grid: grid.as_deref(),
            observation: observation.as_ref(),
            maritime,
        },
        label,
        chrono::Local::now().date_naive(),
    );

    report("local", "Local files", &result, json)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn report(key: &str, name: &str, result: &ConditionsResult, json: bool) -> anyhow::Result<()> {
    let breakdown = RatingEngine::default().breakdown(&RatingInputs {
        wind: result.wind.speed.as_ref(),
        waves: result.waves.as_ref(),
        sky: result.sky.as_ref(),
    });
    tracing::debug!("{} rating breakdown: {:?}", key, breakdown);

    if json {
        let line = serde_json::json!({
            "location": key,
            "name": name,
            "severe": result.is_severe(),
            "conditions": result,
        });
        println!("{}", serde_json::to_string(&line)?);
    } else {
        println!("{}", summary_line(name, result));
    }
    Ok(())
}

fn summary_line(name: &str, result: &ConditionsResult) -> String {
    let mut parts = vec![
        format!("{} ({})", name, result.label),
        format!("{}/10", result.rating),
        result.wind.to_string(),
    ];
    if let Some(waves) = &result.waves {
        parts.push(waves.to_string());
    }
    if let Some(sky) = &result.sky {
        parts.push(sky.to_string());
    }
    if let Some(temp) = result.temperature_f {
        parts.push(format!("{}°F", temp));
    }
    parts.push(result.source.to_string());

    let line = parts.join(" | ");
    if result.is_severe() {
        format!("{} | HAZARD", line)
    } else {
        line
    }
}
