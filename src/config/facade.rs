//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::PageTreeConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a site from files and environment.
    pub fn load(site_root: &Path) -> Result<PageTreeConfig, ConfigError> {
        MergeService::load(site_root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<PageTreeConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> PageTreeConfig {
        PageTreeConfig::default()
    }
}
