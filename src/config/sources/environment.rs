//! Environment variable source: PAGETREE_* prefix with __ separator

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

/// Add environment variable overlay to builder.
/// `PAGETREE__STORAGE__STORE_PATH` sets `storage.store_path`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("PAGETREE")
            .separator("__")
            .try_parsing(true),
    ))
}
