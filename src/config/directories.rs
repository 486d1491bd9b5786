//! Staging directory layout
//!
//! A `Directories` value resolves every path a staging run touches from a
//! single home directory. The runner and the validator both derive the
//! droplet and result.json locations from here, so they always agree.

use crate::error::{StagehandError, StagehandResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical subpaths for one staging invocation, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directories {
    home: PathBuf,
}

impl Directories {
    /// Create the layout rooted at a staging home directory
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// The staging home directory
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Application source root
    pub fn app(&self) -> PathBuf {
        self.home.join("app")
    }

    /// Temporary staging area; the builder writes its output here
    pub fn tmp(&self) -> PathBuf {
        self.home.join("tmp")
    }

    /// Buildpack cache root
    pub fn buildpacks(&self) -> PathBuf {
        self.home.join("buildpacks")
    }

    /// The compiled application bundle left by a successful staging run
    pub fn droplet(&self) -> PathBuf {
        self.tmp().join("droplet")
    }

    /// Machine-readable staging summary (which buildpack matched, etc.)
    pub fn result_json(&self) -> PathBuf {
        self.tmp().join("result.json")
    }

    /// Create the app, tmp and buildpacks directories if absent
    pub fn ensure(&self) -> StagehandResult<()> {
        for dir in [self.app(), self.tmp(), self.buildpacks()] {
            fs::create_dir_all(&dir)
                .map_err(|e| StagehandError::io(format!("creating directory {}", dir.display()), e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn layout_from_home() {
        let dirs = Directories::new("/var/stagehand");
        assert_eq!(dirs.app(), PathBuf::from("/var/stagehand/app"));
        assert_eq!(dirs.tmp(), PathBuf::from("/var/stagehand/tmp"));
        assert_eq!(dirs.buildpacks(), PathBuf::from("/var/stagehand/buildpacks"));
    }

    #[test]
    fn output_paths_live_under_tmp() {
        let dirs = Directories::new("/var/stagehand");
        assert_eq!(dirs.droplet(), PathBuf::from("/var/stagehand/tmp/droplet"));
        assert_eq!(
            dirs.result_json(),
            PathBuf::from("/var/stagehand/tmp/result.json")
        );
    }

    #[test]
    fn ensure_creates_subdirs() {
        let temp = TempDir::new().unwrap();
        let dirs = Directories::new(temp.path().join("home"));

        dirs.ensure().unwrap();

        assert!(dirs.app().is_dir());
        assert!(dirs.tmp().is_dir());
        assert!(dirs.buildpacks().is_dir());
    }

    #[test]
    fn ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = Directories::new(temp.path());

        dirs.ensure().unwrap();
        dirs.ensure().unwrap();
    }
}
