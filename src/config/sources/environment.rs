//! Environment source: FRAMETRACK__STORAGE__STORE_PATH=/data/frames and friends.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FRAMETRACK")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
