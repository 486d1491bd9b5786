//! Config command - show or inspect configuration

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::error::StagehandResult;
use std::path::Path;

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, config_path: &Path) -> StagehandResult<()> {
    match args.command {
        ConfigCommands::Show => {
            let toml = toml::to_string_pretty(config)?;
            print!("{}", toml);
        }
        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
