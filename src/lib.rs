//! Stagehand - Local Buildpack Staging
//!
//! Emulates a PaaS staging pipeline on the local machine: caches
//! buildpacks on disk, runs the buildpack lifecycle builder against an
//! application directory, and validates the resulting droplet.

pub mod buildpack;
pub mod cli;
pub mod config;
pub mod error;
pub mod stager;

pub use error::{StagehandError, StagehandResult};
