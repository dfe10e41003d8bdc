//! RowLog - Rowing Training Log
//!
//! Command-line entry point.
//!
//! Usage:
//! ```bash
//! # Set the body data IDT scoring needs
//! rowlog profile set --name "Hanako" --weight 62.5 --gender female
//!
//! # Score a 2000 m ergometer time
//! rowlog idt calc 7:05.3
//!
//! # Log 8 km on the water yesterday
//! rowlog log add --amount 8000 --category on-water --date 2024-05-09
//!
//! # Per-day chart data for the last week
//! rowlog log week
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rowlog::idt::ErgoTime;
use rowlog::profile::Gender;
use rowlog::storage::config::{get_data_dir, load_config_from};
use rowlog::storage::SqliteStore;
use rowlog::training::Category;
use rowlog::AppConfig;

mod app;

#[derive(Parser)]
#[command(
    name = "rowlog",
    version,
    about = "Rowing training log with IDT scoring",
    long_about = "Score 2000 m ergometer times with the IDT index and keep a log of on-water and ergometer distances."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (holds config.toml and the database)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// IDT scoring commands
    Idt {
        #[command(subcommand)]
        action: IdtCommand,
    },

    /// Training log commands
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Best time, total distance and milestone
    Summary,

    /// Delete all stored data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the current profile
    Show,

    /// Update profile fields; unspecified fields keep their values
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Club or team
        #[arg(long)]
        affiliation: Option<String>,

        /// Profile picture reference (empty to clear)
        #[arg(long)]
        icon: Option<String>,

        /// Body weight in kg (empty to clear)
        #[arg(long)]
        weight: Option<String>,

        /// Gender: male or female
        #[arg(long)]
        gender: Option<Gender>,
    },
}

#[derive(Subcommand)]
enum IdtCommand {
    /// Score a 2000 m time given as M:SS.D
    Calc {
        /// Ergometer time, e.g. 6:58.4
        time: ErgoTime,
    },

    /// List past calculations, newest first
    History,

    /// Delete a calculation by id
    Delete {
        /// Record id
        id: String,
    },

    /// Show the best time and the high score
    Best,
}

#[derive(Subcommand)]
enum LogCommand {
    /// Log a training session
    Add {
        /// Distance in metres
        #[arg(long)]
        amount: f64,

        /// on-water or ergometer
        #[arg(long)]
        category: Category,

        /// Free-text note
        #[arg(long, default_value = "")]
        memo: String,

        /// Session day, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List all sessions, latest first
    List,

    /// Delete a session by id
    Delete {
        /// Record id
        id: String,
    },

    /// Sessions on one day
    Day {
        /// Day, YYYY-MM-DD
        date: NaiveDate,
    },

    /// Per-day distance by category for the chart window
    Week,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(get_data_dir);
    let config = load_config_from(&data_dir)
        .with_context(|| format!("Failed to load configuration from {}", data_dir.display()))?;

    init_tracing(&config, cli.verbose);
    tracing::debug!("Starting RowLog v{}", env!("CARGO_PKG_VERSION"));

    let db_path = config.database_path();
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    app::run(cli.command, &store, &config)
}

/// Filter precedence: `RUST_LOG`, then `--verbose`, then the config file.
fn init_tracing(config: &AppConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("debug")
            } else {
                EnvFilter::try_new(&config.logging.filter)
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
