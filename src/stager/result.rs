//! Staging result metadata
//!
//! The builder leaves a result.json summarising the run. Only a few
//! fields matter here; unknown ones are ignored.

use crate::config::Directories;
use crate::error::{StagehandError, StagehandResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Machine-readable summary of a staging run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingResult {
    /// Display name of the buildpack that matched (e.g. "Ruby")
    pub detected_buildpack: String,

    /// Cache key of the matching buildpack, when the builder reports it
    pub buildpack_key: Option<String>,

    /// Start commands keyed by process type ("web", "worker", ...)
    pub process_types: HashMap<String, String>,
}

impl StagingResult {
    /// Load and parse result.json from the staging output directory
    pub fn load(dirs: &Directories) -> StagehandResult<Self> {
        let path = dirs.result_json();
        let content = fs::read_to_string(&path)
            .map_err(|e| StagehandError::io(format!("reading {}", path.display()), e))?;

        Ok(serde_json::from_str(&content)?)
    }

    /// The web process start command, if the buildpack declared one
    pub fn start_command(&self) -> Option<&str> {
        self.process_types.get("web").map(String::as_str)
    }
}
