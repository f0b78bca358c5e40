//! Dashboard configuration: defaults, TOML file, CLI overrides.

use anyhow::Context;
use clap::Args;
use gwl_data::trend::{TrendConfig, ALPHA, MIN_POINTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CSV_PATH: &str = "combined_waterlevel.csv";

/// Google Drive id of the published `combined_waterlevel.csv`.
pub const DEFAULT_DRIVE_FILE_ID: &str = "1tjkeW3uyw6gUhOQSS8kp-Y2vel_QOsk4";

/// Runtime settings for every subcommand.
///
/// Any key missing from the TOML file keeps its default:
///
/// ```toml
/// host = "127.0.0.1"
/// port = 9000
/// csv_path = "/data/combined_waterlevel.csv"
/// min_points = 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    pub csv_path: PathBuf,
    pub drive_file_id: String,
    /// Replaces the URL derived from `drive_file_id` when set.
    pub download_url: Option<String>,
    pub min_points: usize,
    pub alpha: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            drive_file_id: DEFAULT_DRIVE_FILE_ID.to_string(),
            download_url: None,
            min_points: MIN_POINTS,
            alpha: ALPHA,
        }
    }
}

/// Command-line flags that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the HTTP server to
    #[arg(long)]
    pub port: Option<u16>,

    /// Path of the local observations CSV
    #[arg(long = "csv")]
    pub csv_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid dashboard config")
    }

    /// Read `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                let config = Self::from_toml_str(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?;
                log::info!("config: loaded {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(host) = &overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(csv_path) = &overrides.csv_path {
            self.csv_path = csv_path.clone();
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn download_url(&self) -> String {
        self.download_url
            .clone()
            .unwrap_or_else(|| crate::bootstrap::drive_download_url(&self.drive_file_id))
    }

    pub fn trend_config(&self) -> TrendConfig {
        TrendConfig {
            min_points: self.min_points,
            alpha: self.alpha,
        }
    }
}
