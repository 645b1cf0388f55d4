use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sailcast", version, about = "Sailing conditions from NWS marine text, gridpoint forecasts and NDBC buoys")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch live forecasts and rate each configured location
    Rate {
        /// Period to rate: TODAY, TOMORROW, a weekday, REST-OF-TODAY, ...
        #[arg(short, long, default_value = "TODAY")]
        label: String,

        /// Comma-separated location keys (defaults from config when omitted)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Print one JSON object per location
        #[arg(long)]
        json: bool,
    },
    /// Rate local files without touching the network
    Parse {
        #[arg(short, long)]
        label: String,

        /// Marine bulletin text
        #[arg(long)]
        bulletin: Option<PathBuf>,

        /// Gridpoint forecast JSON (full document or periods array)
        #[arg(long)]
        grid: Option<PathBuf>,

        /// NDBC realtime2 standard meteorological file
        #[arg(long)]
        buoy: Option<PathBuf>,

        /// Treat the location as a sailing/marine spot
        #[arg(long)]
        maritime: bool,

        #[arg(long)]
        json: bool,
    },
}
