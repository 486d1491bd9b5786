//! Buildpacks command - list the cached buildpacks

use crate::buildpack;
use crate::config::{Config, ConfigManager, Directories};
use crate::error::StagehandResult;
use console::style;

/// Execute the buildpacks command
pub async fn execute(config: &Config) -> StagehandResult<()> {
    let dirs = Directories::new(ConfigManager::staging_home(config));
    dirs.ensure()?;

    let buildpacks = buildpack::list(&dirs.buildpacks())?;

    if buildpacks.is_empty() {
        println!(
            "No buildpacks in the cache. Add one with: {}",
            style("stagehand add-buildpack <URL>").cyan()
        );
        return Ok(());
    }

    println!("{}", style("KEY                              PATH").bold());
    for bp in &buildpacks {
        println!("{} {}", bp.name, bp.path.display());
    }

    Ok(())
}
