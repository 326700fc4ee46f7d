//! `badgehub` command line entry point.
//!
//! Loads the local device list, builds the standalone badge registry and
//! prints the badges in badge id order.
//!
//! ```sh
//! badgehub --config-dir /etc/badgehub --timestamp 1520270000
//! RUST_LOG=debug badgehub --json
//! ```
//!
//! Logs go to stderr; stdout only carries the badge listing. A missing device
//! list is a startup configuration error and exits with status 1.

mod output;

use anyhow::Context;
use badgehub_core::constants::{DEFAULT_BACKFILL_WINDOW_SECS, DEFAULT_CONFIG_DIR};
use badgehub_registry::{BadgeManager, ManagerConfig, StandaloneBadgeManager};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt};

/// Standalone badge registry: list the badges from a local device list.
#[derive(Debug, Parser)]
#[command(name = "badgehub", version = badgehub_core::VERSION, about)]
struct Cli {
    /// Directory containing devices.txt
    #[arg(long, env = "BADGEHUB_CONFIG_DIR", default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Reference timestamp (epoch seconds) for all badges; defaults to 24h before now
    #[arg(long, env = "BADGEHUB_TIMESTAMP")]
    timestamp: Option<i64>,

    /// Seconds before startup to begin from when no timestamp is given
    #[arg(long, default_value_t = DEFAULT_BACKFILL_WINDOW_SECS)]
    backfill_secs: i64,

    /// Print badges as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn manager_config(&self) -> ManagerConfig {
        let mut config =
            ManagerConfig::new(&self.config_dir).backfill_window_secs(self.backfill_secs);
        if let Some(ts) = self.timestamp {
            config = config.reference_timestamp(ts);
        }
        config
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut manager = StandaloneBadgeManager::new(cli.manager_config());

    if let Err(e) = manager.pull_badges_list() {
        if e.is_configuration() {
            debug!("Exiting: badge device list is not usable");
            return Ok(ExitCode::FAILURE);
        }
        return Err(e).context("failed to load badge list");
    }

    let badges = manager.badges()?;
    let rendered = if cli.json {
        output::render_json(badges).context("failed to serialize badges")?
    } else {
        output::render_table(badges)
    };
    print!("{rendered}");
    if cli.json {
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
