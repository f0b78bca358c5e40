//! Command implementations for the GWL CLI.
//!
//! Provides subcommands for fetching the groundwater level dataset,
//! serving the interactive trend dashboard, and printing the same trend
//! summary the dashboard shows.

use clap::Subcommand;
use gwl_core::{FilterSelection, Variable};
use gwl_db::Database;
use log::{info, warn};
use std::path::Path;

pub mod bootstrap;
pub mod config;
pub mod dashboard;
pub mod server;
pub mod summary;

use config::{DashboardConfig, Overrides};

#[derive(Subcommand)]
pub enum Command {
    /// Download the dataset if needed, load it and serve the dashboard
    Serve {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Only download the dataset CSV
    Fetch {
        #[command(flatten)]
        overrides: Overrides,

        /// Download even if the local file already exists
        #[arg(long)]
        force: bool,
    },

    /// Print the trend summary for a selection
    Summary {
        #[command(flatten)]
        overrides: Overrides,

        /// Region to include (repeatable)
        #[arg(short = 'r', long = "region")]
        regions: Vec<String>,

        /// Site identifier to include (repeatable); all sites when omitted
        #[arg(short = 's', long = "site")]
        sites: Vec<String>,

        /// Variable to analyze, by key or CSV column name
        #[arg(long, default_value = "water_level_new")]
        variable: Variable,

        /// Print the full view as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command, config_path: Option<&Path>) -> anyhow::Result<()> {
    match command {
        Command::Serve { overrides } => {
            let config = DashboardConfig::load(config_path)?.with_overrides(&overrides);
            bootstrap::ensure_csv(&config, false).await?;
            let db = load_database(&config)?;
            server::serve(&config, db).await
        }
        Command::Fetch { overrides, force } => {
            let config = DashboardConfig::load(config_path)?.with_overrides(&overrides);
            bootstrap::ensure_csv(&config, force).await?;
            Ok(())
        }
        Command::Summary {
            overrides,
            regions,
            sites,
            variable,
            json,
        } => {
            let config = DashboardConfig::load(config_path)?.with_overrides(&overrides);
            let db = load_database(&config)?;
            let selection = FilterSelection::new(regions, sites, variable);
            let text = summary::render_summary(&db, &selection, &config.trend_config(), json)?;
            println!("{}", text.trim_end());
            Ok(())
        }
    }
}

/// Load the configured CSV into a fresh in-memory database.
pub fn load_database(config: &DashboardConfig) -> anyhow::Result<Database> {
    let db = Database::new()?;
    let report = db.load_observations_file(&config.csv_path)?;
    if report.loaded == 0 {
        warn!("{} contains no usable observations", config.csv_path.display());
    }
    info!(
        "Observation table ready: {} rows from {}",
        report.loaded,
        config.csv_path.display()
    );
    Ok(db)
}
