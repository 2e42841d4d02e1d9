//! Configuration
//!
//! Layered configuration built with the `config` crate. Sources are merged
//! from lowest to highest precedence: built-in defaults, the global file,
//! the site file, then `PAGETREE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod site;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use site::storage_paths::StorageConfig;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageTreeConfig {
    /// Tree index storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
