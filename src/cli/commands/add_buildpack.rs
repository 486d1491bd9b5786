//! Add-buildpack command - download a buildpack into the cache

use crate::buildpack::BuildpackStore;
use crate::cli::args::AddBuildpackArgs;
use crate::config::{Config, ConfigManager, Directories};
use crate::error::{StagehandError, StagehandResult};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Execute the add-buildpack command
pub async fn execute(args: AddBuildpackArgs, config: &Config) -> StagehandResult<()> {
    let dirs = Directories::new(ConfigManager::staging_home(config));
    dirs.ensure()?;

    let store = BuildpackStore::new(dirs.buildpacks());
    debug!("Buildpack cache: {}", store.cache_root().display());

    let pb = create_progress_bar(&format!("Downloading {}...", args.url));

    // The download is blocking (ureq); keep it off the async runtime.
    let url = args.url.clone();
    let outcome = tokio::task::spawn_blocking(move || store.add(&url))
        .await
        .map_err(|e| {
            StagehandError::io("joining download task", std::io::Error::other(e.to_string()))
        })??;

    pb.finish_and_clear();

    if outcome.downloaded {
        println!(
            "{} Added buildpack {} ({})",
            style("✓").green(),
            style(&outcome.name).cyan(),
            outcome.key
        );
    } else {
        println!(
            "{} Buildpack {} already cached ({})",
            style("✓").green(),
            style(&outcome.name).cyan(),
            outcome.key
        );
    }

    Ok(())
}

fn create_progress_bar(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
