mod backend;
mod commands;
mod config;
mod feed;

use anyhow::Result;
use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser)]
#[command(name = "caltask")]
#[command(about = "Reconcile calendar events into your task tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync calendar events into the task backend
    Sync {
        /// Decide and log without creating any tasks
        #[arg(long)]
        dry_run: bool,

        /// Override the lookback window in days
        #[arg(long)]
        days: Option<u32>,
    },
    /// List calendar events inside the lookback window
    Events {
        /// Override the lookback window in days
        #[arg(long)]
        days: Option<u32>,
    },
    /// List active clients from the backend directory
    Clients,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Sync { dry_run, days } => {
            commands::sync::run(config.with_days(days), dry_run).await
        }
        Commands::Events { days } => commands::events::run(config.with_days(days)).await,
        Commands::Clients => commands::clients::run(config).await,
    }
}
