//! Configuration schema for stagehand
//!
//! Configuration is stored at `~/.config/stagehand/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Staging settings
    pub staging: StagingConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Staging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Buildpack lifecycle builder executable
    pub builder: String,

    /// Staging home directory (app/tmp/buildpacks live under it).
    /// Overridden by the STAGEHAND_HOME environment variable.
    pub home: Option<PathBuf>,

    /// Extra arguments appended to every builder invocation
    pub builder_args: Vec<String>,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            builder: "builder".to_string(),
            home: None,
            builder_args: vec![],
        }
    }
}
