//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Stagehand - Local Buildpack Staging
///
/// Caches buildpacks, runs the buildpack lifecycle against an application
/// directory, and validates the resulting droplet.
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STAGEHAND_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a buildpack into the local cache
    AddBuildpack(AddBuildpackArgs),

    /// List cached buildpacks
    Buildpacks,

    /// Stage the application into a droplet
    Stage(StageArgs),

    /// Show or inspect configuration
    Config(ConfigArgs),
}

/// Arguments for the add-buildpack command
#[derive(Parser, Debug)]
pub struct AddBuildpackArgs {
    /// Buildpack source URL (a tar.gz archive or repository snapshot)
    pub url: String,
}

/// Arguments for the stage command
#[derive(Parser, Debug)]
pub struct StageArgs {
    /// Application directory (defaults to <staging home>/app)
    #[arg(short, long)]
    pub app: Option<PathBuf>,

    /// Skip buildpack detection and run the first buildpack unconditionally
    #[arg(long)]
    pub skip_detect: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved configuration
    Show,

    /// Print the config file path
    Path,
}
