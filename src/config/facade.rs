//! Config loading entry points.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::TrackerConfig;
use config::{ConfigError, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, workspace files and environment, in that order.
    pub fn load(workspace_root: &Path) -> Result<TrackerConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load defaults plus a single explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<TrackerConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }
}
