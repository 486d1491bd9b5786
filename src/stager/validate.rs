//! Post-stage artifact validation
//!
//! The builder's exit status is not trusted as the sole success signal: a
//! buildpack can exit zero without leaving a usable droplet behind. This
//! check re-derives success from the output tree alone.

use crate::config::Directories;
use crate::error::{StagehandError, StagehandResult};
use tracing::debug;

/// Judge whether a staging run actually produced a valid artifact.
///
/// The droplet is checked before result.json; when both are missing the
/// caller sees the missing-droplet message, which signals "no buildpack
/// matched" as opposed to a matched-but-broken build. Read-only, no
/// retries; safe against a freshly created empty output directory.
pub fn validate_staged_app(dirs: &Directories) -> StagehandResult<()> {
    let droplet = dirs.droplet();
    if !droplet.exists() {
        debug!("No droplet at {}", droplet.display());
        return Err(StagehandError::MissingDroplet);
    }

    let result_json = dirs.result_json();
    if !result_json.exists() {
        debug!("No result metadata at {}", result_json.display());
        return Err(StagehandError::MissingResultInfo);
    }

    Ok(())
}
