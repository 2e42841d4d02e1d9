//! Materialized path helpers
//!
//! Paths are slash-delimited and relative to the locale root, e.g.
//! `docs/install/linux`. The first segment names the top-level branch.

use crate::error::ValidationError;

/// Segment separator for materialized paths
pub const SEPARATOR: char = '/';

/// Derive the root segment of a path.
///
/// Returns everything before the first `/`, or the whole path when it contains none.
pub fn root_segment(path: &str) -> &str {
    match path.find(SEPARATOR) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Expected depth for a path: number of segments minus one.
pub fn depth_of(path: &str) -> u32 {
    path.matches(SEPARATOR).count() as u32
}

/// Whether `path` lies strictly below `root`.
pub fn is_descendant_of(path: &str, root: &str) -> bool {
    path.len() > root.len() + 1
        && path.starts_with(root)
        && path[root.len()..].starts_with(SEPARATOR)
}

/// Check the shape of a stored path.
pub fn validate_path(path: &str) -> Result<(), ValidationError> {
    let reason = if path.is_empty() {
        Some("path cannot be empty")
    } else if path.contains('\0') {
        Some("path cannot contain NUL")
    } else if path.starts_with(SEPARATOR) || path.ends_with(SEPARATOR) {
        Some("path cannot start or end with '/'")
    } else if path.split(SEPARATOR).any(str::is_empty) {
        Some("path cannot contain empty segments")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ValidationError::InvalidPath {
            path: path.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
