//! Stage command - run the buildpack lifecycle and validate the result

use crate::buildpack;
use crate::cli::args::StageArgs;
use crate::config::{Config, ConfigManager, Directories};
use crate::error::{StagehandError, StagehandResult};
use crate::stager::{run_buildpacks, validate_staged_app, LifecycleRunner, StagingResult};
use console::style;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute the stage command
pub async fn execute(args: StageArgs, config: &Config) -> StagehandResult<()> {
    let dirs = Directories::new(ConfigManager::staging_home(config));
    dirs.ensure()?;

    let app_dir = resolve_app_dir(&args, &dirs)?;
    debug!("Application directory: {}", app_dir.display());

    let buildpacks = buildpack::list(&dirs.buildpacks())?;
    info!("Staging with {} cached buildpacks", buildpacks.len());

    let mut extra_args = config.staging.builder_args.clone();
    if args.skip_detect {
        extra_args.push("-skipDetect".to_string());
    }

    let runner = LifecycleRunner::new(
        buildpacks,
        app_dir,
        dirs.tmp(),
        config.staging.builder.clone(),
    )?
    .with_extra_args(extra_args);

    run_buildpacks(&mut io::stdout(), &runner).await?;

    // Success is judged from the output tree, not the builder's exit code.
    validate_staged_app(&dirs)?;

    let result = StagingResult::load(&dirs)?;
    println!(
        "{} Staging complete: {} droplet at {}",
        style("✓").green(),
        style(&result.detected_buildpack).cyan(),
        dirs.droplet().display()
    );
    if let Some(cmd) = result.start_command() {
        println!("  Start with: {}", cmd);
    }

    Ok(())
}

fn resolve_app_dir(args: &StageArgs, dirs: &Directories) -> StagehandResult<PathBuf> {
    if let Some(ref path) = args.app {
        return path.canonicalize().map_err(|e| {
            StagehandError::io(format!("resolving app directory {}", path.display()), e)
        });
    }
    Ok(dirs.app())
}
