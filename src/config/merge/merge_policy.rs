//! Merge rules: defaults first, later sources override earlier ones.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("storage.store_path", ".frametrack/store")?
        .set_default("storage.export_dir", "exports")?
        .set_default("view.page_size", 10)?
        .set_default("cache.ttl_secs", 5)
}
