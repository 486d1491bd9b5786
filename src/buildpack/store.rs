//! On-disk buildpack cache
//!
//! Buildpacks are cached under a root directory, one subdirectory per
//! buildpack, named by the md5 hex digest of the buildpack's derived name.
//! The digest of the name (not the URL) is the on-disk contract: external
//! tooling relies on being able to recompute it, and two URLs sharing a
//! final path segment alias to the same entry.

use crate::buildpack::fetch;
use crate::error::{StagehandError, StagehandResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of adding a buildpack to the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Human-readable buildpack name derived from the URL
    pub name: String,
    /// Cache key: md5 hex digest of the name
    pub key: String,
    /// Cache directory for this buildpack
    pub path: PathBuf,
    /// False when the entry was already cached and no download happened
    pub downloaded: bool,
}

/// Buildpack cache rooted at an explicit directory
///
/// The store exclusively owns the cache layout; nothing else writes
/// into it.
#[derive(Debug, Clone)]
pub struct BuildpackStore {
    cache_root: PathBuf,
}

impl BuildpackStore {
    /// Create a store over the given cache root
    pub fn new(cache_root: impl Into<PathBuf>) -> Self {
        Self {
            cache_root: cache_root.into(),
        }
    }

    /// The cache root directory
    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    /// Ensure the buildpack at `url` is present in the cache.
    ///
    /// Idempotent: if the entry's key already exists on disk, this is a
    /// no-op and performs no network access. New entries are unpacked into
    /// a `.partial-` sibling and renamed into place, so a reader never
    /// observes a half-populated entry. Racing adds of the same new URL
    /// are first-wins: the loser discards its partial directory.
    pub fn add(&self, url: &str) -> StagehandResult<AddOutcome> {
        let name = buildpack_name_from_url(url)?;
        let key = cache_key(&name);
        let target = self.cache_root.join(&key);

        if target.exists() {
            debug!("Buildpack {} already cached as {}", name, key);
            return Ok(AddOutcome {
                name,
                key,
                path: target,
                downloaded: false,
            });
        }

        fs::create_dir_all(&self.cache_root).map_err(|e| {
            StagehandError::io(
                format!("creating cache root {}", self.cache_root.display()),
                e,
            )
        })?;

        let partial = self.cache_root.join(format!(".partial-{}", key));
        if partial.exists() {
            // Leftover from a crashed download
            fs::remove_dir_all(&partial).map_err(|e| {
                StagehandError::io(format!("removing stale partial {}", partial.display()), e)
            })?;
        }

        if let Err(e) = fetch::download_and_unpack(url, &partial) {
            let _ = fs::remove_dir_all(&partial);
            return Err(e);
        }

        if let Err(e) = fs::rename(&partial, &target) {
            let _ = fs::remove_dir_all(&partial);
            if target.exists() {
                // Lost the race to a concurrent add of the same buildpack
                debug!("Buildpack {} cached concurrently as {}", name, key);
                return Ok(AddOutcome {
                    name,
                    key,
                    path: target,
                    downloaded: false,
                });
            }
            return Err(StagehandError::io(
                format!("moving buildpack into {}", target.display()),
                e,
            ));
        }

        info!("Added buildpack {} as {}", name, key);
        Ok(AddOutcome {
            name,
            key,
            path: target,
            downloaded: true,
        })
    }
}

/// Derive a buildpack name from its source URL: the last path segment,
/// with any `.git`, `.tar.gz` or `.tgz` suffix removed
pub fn buildpack_name_from_url(url: &str) -> StagehandResult<String> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or("");

    let name = segment
        .trim_end_matches(".tar.gz")
        .trim_end_matches(".tgz")
        .trim_end_matches(".git");

    if name.is_empty() || !trimmed.contains('/') {
        return Err(StagehandError::BuildpackName(url.to_string()));
    }

    Ok(name.to_string())
}

/// Cache key for a buildpack name: 32 lowercase hex chars of its md5 digest
pub fn cache_key(name: &str) -> String {
    format!("{:x}", md5::compute(name.as_bytes()))
}
