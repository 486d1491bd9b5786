//! Staging runner adapter
//!
//! Bridges the local directory conventions to an external buildpack
//! lifecycle builder. The executor is injected behind a trait so the
//! staging flow can be tested with an in-memory recorder instead of a
//! subprocess.

pub mod result;
pub mod validate;

pub use result::StagingResult;
pub use validate::validate_staged_app;

use crate::buildpack::Buildpack;
use crate::error::{StagehandError, StagehandResult};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Anything that can attempt a staging run
///
/// Production supplies [`LifecycleRunner`]; tests supply a recorder.
#[async_trait]
pub trait StagingExecutor: Send + Sync {
    /// Attempt to stage; the error is reported to the caller verbatim
    async fn run(&self) -> StagehandResult<()>;
}

/// Write the progress marker to `sink`, then hand off to the executor.
///
/// The marker is emitted before the run regardless of outcome. The
/// executor's error is returned unwrapped: this adapter does not retry
/// and does not judge what the builder reported.
pub async fn run_buildpacks<W: Write>(
    sink: &mut W,
    executor: &dyn StagingExecutor,
) -> StagehandResult<()> {
    writeln!(sink, "Running Buildpacks...")
        .map_err(|e| StagehandError::io("writing staging progress", e))?;

    executor.run().await
}

/// Runs the external buildpack lifecycle builder as a subprocess
#[derive(Debug, Clone)]
pub struct LifecycleRunner {
    buildpacks: Vec<Buildpack>,
    app_dir: PathBuf,
    output_dir: PathBuf,
    builder: String,
    extra_args: Vec<String>,
}

impl LifecycleRunner {
    /// Pure construction, no I/O. Fails only on malformed input: an empty
    /// application directory path.
    pub fn new(
        buildpacks: Vec<Buildpack>,
        app_dir: PathBuf,
        output_dir: PathBuf,
        builder: impl Into<String>,
    ) -> StagehandResult<Self> {
        if app_dir.as_os_str().is_empty() {
            return Err(StagehandError::EmptyAppDir);
        }

        Ok(Self {
            buildpacks,
            app_dir,
            output_dir,
            builder: builder.into(),
            extra_args: vec![],
        })
    }

    /// Append extra arguments to every builder invocation
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// The builder's argument vector.
    ///
    /// The buildpacks directory is the parent of the cached entries; the
    /// order flag lists their cache keys in registry order.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = vec![
            "-buildDir".to_string(),
            self.app_dir.display().to_string(),
            "-outputDroplet".to_string(),
            self.output_dir.join("droplet").display().to_string(),
            "-outputMetadata".to_string(),
            self.output_dir.join("result.json").display().to_string(),
        ];

        if let Some(dir) = self.buildpacks_dir() {
            args.push("-buildpacksDir".to_string());
            args.push(dir.display().to_string());
        }

        if !self.buildpacks.is_empty() {
            let order: Vec<&str> = self.buildpacks.iter().map(|b| b.name.as_str()).collect();
            args.push("-buildpackOrder".to_string());
            args.push(order.join(","));
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }

    fn buildpacks_dir(&self) -> Option<PathBuf> {
        self.buildpacks
            .first()
            .and_then(|b| b.path.parent())
            .map(Path::to_path_buf)
    }
}

#[async_trait]
impl StagingExecutor for LifecycleRunner {
    async fn run(&self) -> StagehandResult<()> {
        let args = self.command_args();
        debug!("Executing: {} {:?}", self.builder, args);

        let output = Command::new(&self.builder)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| StagehandError::command_failed(&self.builder, e))?;

        if output.status.success() {
            info!("Builder finished successfully");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(StagehandError::StagingExecution {
                code: output.status.code().unwrap_or(-1),
                stderr,
            })
        }
    }
}
