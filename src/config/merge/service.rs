//! MergeService: orchestrates sources, applies merge policy, deserializes to PageTreeConfig.

use crate::config::sources::{environment, global_file, site_file};
use crate::config::PageTreeConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config for a site from standard sources.
    /// Precedence: global file (lowest) -> site file -> environment (highest).
    pub fn load(site_root: &Path) -> Result<PageTreeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = site_file::add_to_builder(builder, site_root)?;
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<PageTreeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
