//! GWL CLI - groundwater level trend dashboard and summaries.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gwl-cli",
    version,
    about = "Groundwater level trend analysis toolkit"
)]
struct Cli {
    /// TOML config file; CLI flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: gwl_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("gwl-cli {}", env!("CARGO_PKG_VERSION"));
    gwl_cmd::run(cli.command, cli.config.as_deref()).await
}
