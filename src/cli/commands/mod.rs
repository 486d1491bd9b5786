//! CLI command implementations

pub mod add_buildpack;
pub mod buildpacks;
pub mod config;
pub mod stage;

pub use add_buildpack::execute as add_buildpack;
pub use buildpacks::execute as buildpacks;
pub use config::execute as config;
pub use stage::execute as stage;
