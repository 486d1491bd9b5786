//! Stagehand - Local Buildpack Staging
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use stagehand::cli::{Cli, Commands};
use stagehand::config::ConfigManager;
use stagehand::error::StagehandResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> StagehandResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let config = config_manager.load().await?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug. The config can
    // raise the default to info and switch the format; -v flags win.
    let filter = if cli.verbose >= 2 {
        EnvFilter::new("stagehand=debug")
    } else if cli.verbose == 1 || config.general.verbose {
        EnvFilter::new("stagehand=info")
    } else {
        EnvFilter::new("stagehand=warn")
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::AddBuildpack(args) => stagehand::cli::commands::add_buildpack(args, &config).await,
        Commands::Buildpacks => stagehand::cli::commands::buildpacks(&config).await,
        Commands::Stage(args) => stagehand::cli::commands::stage(args, &config).await,
        Commands::Config(args) => {
            stagehand::cli::commands::config(args, &config, config_manager.path()).await
        }
    }
}
