//! Tree Index Store
//!
//! Durable storage for tree nodes keyed by id, with a secondary index on
//! `(path, locale)` that keeps paths unique per locale and answers
//! materialized-path subtree queries in path order.

pub mod persistence;
pub mod validation;

use crate::error::{ApiError, StorageError};
use crate::tree::path;
use crate::types::{LocaleCode, NodeId, PageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TreeNode: one indexed page or folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub path: String,
    pub depth: u32,
    pub title: String,
    pub is_folder: bool,
    pub is_private: bool,
    pub private_ns: Option<String>,
    pub parent: Option<NodeId>,
    pub page_id: Option<PageId>,
    pub locale_code: LocaleCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a node.
///
/// Required fields are optional here so that incomplete input can be
/// rejected with a `ValidationError` instead of failing to construct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTreeNode {
    pub path: Option<String>,
    pub depth: Option<u32>,
    pub title: Option<String>,
    pub is_folder: bool,
    pub is_private: bool,
    pub private_ns: Option<String>,
    pub parent: Option<NodeId>,
    pub page_id: Option<PageId>,
    pub locale_code: Option<LocaleCode>,
}

impl NewTreeNode {
    /// Fill path, title and locale, deriving depth from the path.
    pub fn new(locale: impl Into<LocaleCode>, path: &str, title: &str) -> Self {
        NewTreeNode {
            path: Some(path.to_string()),
            depth: Some(crate::tree::path::depth_of(path)),
            title: Some(title.to_string()),
            locale_code: Some(locale.into()),
            ..Default::default()
        }
    }

    pub fn folder(mut self) -> Self {
        self.is_folder = true;
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_page(mut self, page_id: PageId) -> Self {
        self.page_id = Some(page_id);
        self
    }

    pub fn private_to(mut self, namespace: &str) -> Self {
        self.is_private = true;
        self.private_ns = Some(namespace.to_string());
        self
    }
}

/// Subtree query: the root node plus every node whose path starts with `root/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeQuery {
    pub root_path: String,
    /// Restrict results to one locale; `None` spans all locales
    pub locale: Option<LocaleCode>,
}

impl SubtreeQuery {
    /// Whether a stored node belongs to this subtree.
    pub fn matches(&self, node: &TreeNode) -> bool {
        let in_branch = node.path == self.root_path
            || path::is_descendant_of(&node.path, &self.root_path);
        in_branch
            && self
                .locale
                .as_ref()
                .map_or(true, |locale| *locale == node.locale_code)
    }
}

/// Tree Index Store interface
pub trait TreeNodeStore: Send + Sync {
    /// Validate, stamp and persist a new node.
    fn insert(&self, node: NewTreeNode) -> Result<TreeNode, ApiError>;

    /// Persist changes to an existing node, refreshing `updated_at`.
    fn update(&self, node: &TreeNode) -> Result<TreeNode, ApiError>;

    fn get(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError>;

    fn get_by_path(
        &self,
        locale: &LocaleCode,
        path: &str,
    ) -> Result<Option<TreeNode>, StorageError>;

    /// Remove a single node. Descendants are left in place.
    fn delete(&self, id: NodeId) -> Result<Option<TreeNode>, StorageError>;

    /// Nodes matching the query, ordered by path ascending.
    fn query_subtree(&self, query: &SubtreeQuery) -> Result<Vec<TreeNode>, StorageError>;

    /// Flush pending writes to durable storage.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
