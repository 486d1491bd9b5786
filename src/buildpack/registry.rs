//! Cached buildpack enumeration
//!
//! Turns the on-disk cache into the ordered list a staging run consumes.

use crate::error::{StagehandError, StagehandResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A cached buildpack entry: its cache-key directory name and location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buildpack {
    pub name: String,
    pub path: PathBuf,
}

/// List the buildpacks cached under `cache_root`.
///
/// Only immediate subdirectories count; partial downloads and stray files
/// are skipped. Entries are sorted by name so the order fed to the builder
/// is reproducible across runs. A missing or unreadable cache root is a
/// caller bug (staging before any buildpack was added) and surfaces as an
/// IO error.
pub fn list(cache_root: &Path) -> StagehandResult<Vec<Buildpack>> {
    let entries = std::fs::read_dir(cache_root).map_err(|e| {
        StagehandError::io(format!("reading buildpack cache {}", cache_root.display()), e)
    })?;

    let mut buildpacks = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            StagehandError::io(format!("reading buildpack cache {}", cache_root.display()), e)
        })?;

        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(".partial-") {
            // In-flight download; not a usable buildpack yet
            continue;
        }

        buildpacks.push(Buildpack {
            name,
            path: entry.path(),
        });
    }

    buildpacks.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} cached buildpacks", buildpacks.len());
    Ok(buildpacks)
}
