//! Tree node validation owned by the store.
//!
//! Checks the shape of a node only. Parent consistency is a caller precondition.

use super::{NewTreeNode, TreeNode};
use crate::error::ValidationError;
use crate::tree::path::{depth_of, validate_path};
use crate::types::LocaleCode;

/// A new node whose required fields have been checked.
#[derive(Debug, Clone)]
pub(crate) struct ValidatedNode {
    pub path: String,
    pub depth: u32,
    pub title: String,
    pub locale_code: LocaleCode,
}

/// Validate required fields of a node before insert.
pub(crate) fn validate_new_node(node: &NewTreeNode) -> Result<ValidatedNode, ValidationError> {
    let path = node
        .path
        .as_ref()
        .ok_or(ValidationError::MissingField("path"))?;
    let title = node
        .title
        .as_ref()
        .ok_or(ValidationError::MissingField("title"))?;
    let depth = node.depth.ok_or(ValidationError::MissingField("depth"))?;
    let locale_code = node
        .locale_code
        .as_ref()
        .ok_or(ValidationError::MissingField("locale_code"))?;

    validate_shape(path, depth, title, locale_code)?;

    Ok(ValidatedNode {
        path: path.clone(),
        depth,
        title: title.clone(),
        locale_code: locale_code.clone(),
    })
}

/// Validate an existing node before update.
pub(crate) fn validate_node(node: &TreeNode) -> Result<(), ValidationError> {
    validate_shape(&node.path, node.depth, &node.title, &node.locale_code)
}

fn validate_shape(
    path: &str,
    depth: u32,
    title: &str,
    locale_code: &LocaleCode,
) -> Result<(), ValidationError> {
    validate_path(path)?;

    let expected = depth_of(path);
    if depth != expected {
        return Err(ValidationError::DepthMismatch {
            path: path.to_string(),
            depth,
            expected,
        });
    }

    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let code = locale_code.as_str();
    if code.is_empty() || code.contains('\0') {
        return Err(ValidationError::InvalidLocale(code.to_string()));
    }

    Ok(())
}

/// Empty namespaces mean public.
pub(crate) fn normalize_private_ns(ns: Option<String>) -> Option<String> {
    ns.filter(|ns| !ns.is_empty())
}
