//! Buildpack download and archive extraction
//!
//! Fetches a gzipped tarball over HTTP and unpacks it, stripping the
//! leading path component so GitHub-style `repo-ref/` archives land with
//! `bin/detect` and friends at the destination root.

use crate::error::{StagehandError, StagehandResult};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Download the archive at `url` and unpack it into `dest`
pub fn download_and_unpack(url: &str, dest: &Path) -> StagehandResult<()> {
    info!("Downloading buildpack from {}", url);

    let response = ureq::get(url)
        .call()
        .map_err(|e| StagehandError::download(url, e.to_string()))?;

    let reader = response.into_body().into_reader();
    unpack_tar_gz(reader, dest, url)?;

    info!("Unpacked buildpack to {}", dest.display());
    Ok(())
}

/// Unpack a gzipped tar stream into `dest`, stripping the first path
/// component of every entry
pub(crate) fn unpack_tar_gz<R: Read>(reader: R, dest: &Path, url: &str) -> StagehandResult<()> {
    fs::create_dir_all(dest)
        .map_err(|e| StagehandError::io(format!("creating directory {}", dest.display()), e))?;

    let decoder = GzDecoder::new(reader);
    let mut archive = tar::Archive::new(decoder);

    let entries = archive
        .entries()
        .map_err(|e| StagehandError::download(url, format!("payload is not a tar.gz: {}", e)))?;

    for entry in entries {
        let mut entry =
            entry.map_err(|e| StagehandError::download(url, format!("corrupt archive: {}", e)))?;
        let path = entry
            .path()
            .map_err(|e| StagehandError::download(url, format!("corrupt archive: {}", e)))?;

        // Strip the archive prefix (e.g. ruby-buildpack-v1.2.3/)
        let stripped: PathBuf = path.components().skip(1).collect();
        if stripped.as_os_str().is_empty() {
            continue;
        }

        let dest_path = dest.join(&stripped);
        debug!("Extracting {}", stripped.display());

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StagehandError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        entry
            .unpack(&dest_path)
            .map_err(|e| StagehandError::download(url, format!("corrupt archive: {}", e)))?;
    }

    Ok(())
}
