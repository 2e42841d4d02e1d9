//! Site config file: <site_root>/pagetree.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub const SITE_CONFIG_FILE: &str = "pagetree.toml";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    site_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = site_root.join(SITE_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}
