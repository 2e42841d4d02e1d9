//! XDG Base Directory utilities for site data management.

use crate::error::ApiError;
use std::path::{Component, Path, PathBuf};

/// Get XDG data home directory
///
/// Returns `$XDG_DATA_HOME` if set, otherwise defaults to `$HOME/.local/share`
pub fn data_home() -> Option<PathBuf> {
    if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg_data_home));
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".local").join("share"))
}

/// Get the data directory for a specific site
///
/// Returns `$XDG_DATA_HOME/pagetree/<site_path>/`. The canonical site path is
/// used directly as a directory structure, so `/srv/wiki` becomes
/// `$XDG_DATA_HOME/pagetree/srv/wiki/`.
pub fn site_data_dir(site_root: &Path) -> Result<PathBuf, ApiError> {
    let data_home = data_home().ok_or_else(|| {
        ApiError::ConfigError(
            "Could not determine XDG data home directory (HOME not set)".to_string(),
        )
    })?;

    let canonical = site_root.canonicalize().map_err(|e| {
        ApiError::ConfigError(format!("Failed to canonicalize site path: {}", e))
    })?;

    Ok(append_normal_components(data_home.join("pagetree"), &canonical))
}

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Result<PathBuf, ApiError> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config_home));
    }

    let home = std::env::var("HOME").map_err(|_| {
        ApiError::ConfigError(
            "Could not determine XDG config home directory (HOME not set)".to_string(),
        )
    })?;

    Ok(PathBuf::from(home).join(".config"))
}

/// Join only the normal components of `path` onto `base`.
pub(crate) fn append_normal_components(base: PathBuf, path: &Path) -> PathBuf {
    path.components().fold(base, |dir, component| match component {
        Component::Normal(name) => dir.join(name),
        Component::RootDir | Component::Prefix(_) | Component::CurDir | Component::ParentDir => dir,
    })
}
