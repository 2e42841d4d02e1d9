//! Subtree Resolver
//!
//! Answers "what is the subtree under path P?". The lookup is always scoped
//! to the whole top-level branch containing `P`: the root segment of `P` is
//! derived first, then the root node and every node below it are returned,
//! ordered by path.

use crate::error::{ApiError, StorageError};
use crate::relations::{LocaleDirectory, PageDirectory};
use crate::store::{SubtreeQuery, TreeNode, TreeNodeStore};
use crate::tree::path::root_segment;
use crate::types::{LocaleCode, NodeId, PageId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for a subtree fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTreeOptions {
    /// Any path inside the branch to materialize
    pub path: String,
    /// Restrict to one locale; `None` returns every locale
    pub locale: Option<LocaleCode>,
}

impl FetchTreeOptions {
    pub fn new(path: impl Into<String>) -> Self {
        FetchTreeOptions {
            path: path.into(),
            locale: None,
        }
    }

    pub fn in_locale(mut self, locale: impl Into<LocaleCode>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Whether a row is a container or renderable content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    Page,
}

/// One row of a fetched subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRow {
    pub id: NodeId,
    pub path: String,
    pub depth: u32,
    pub title: String,
    pub is_private: bool,
    pub is_folder: bool,
    #[serde(rename = "privateNS")]
    pub private_ns: Option<String>,
    pub parent: Option<NodeId>,
    pub page_id: Option<PageId>,
    pub locale_code: LocaleCode,
}

impl TreeRow {
    /// Folders are containers; the store does not check that they carry no page.
    pub fn kind(&self) -> NodeKind {
        if self.is_folder {
            NodeKind::Folder
        } else {
            NodeKind::Page
        }
    }

    pub fn resolve_page<D: PageDirectory + ?Sized>(
        &self,
        pages: &D,
    ) -> Result<Option<D::Page>, ApiError> {
        match (self.kind(), self.page_id) {
            (NodeKind::Page, Some(page_id)) => pages.page(page_id),
            _ => Ok(None),
        }
    }

    pub fn resolve_locale<D: LocaleDirectory + ?Sized>(
        &self,
        locales: &D,
    ) -> Result<Option<D::Locale>, ApiError> {
        locales.locale(&self.locale_code)
    }
}

impl From<TreeNode> for TreeRow {
    fn from(node: TreeNode) -> Self {
        TreeRow {
            id: node.id,
            path: node.path,
            depth: node.depth,
            title: node.title,
            is_private: node.is_private,
            is_folder: node.is_folder,
            private_ns: node.private_ns,
            parent: node.parent,
            page_id: node.page_id,
            locale_code: node.locale_code,
        }
    }
}

/// Anything that can produce subtree rows.
///
/// A caching layer implements this trait around another `TreeSource`.
pub trait TreeSource: Send + Sync {
    fn fetch_tree(&self, opts: &FetchTreeOptions) -> Result<Vec<TreeRow>, StorageError>;
}

/// Subtree Resolver over a Tree Index Store
#[derive(Clone)]
pub struct SubtreeResolver {
    store: Arc<dyn TreeNodeStore>,
}

impl SubtreeResolver {
    pub fn new(store: Arc<dyn TreeNodeStore>) -> Self {
        Self { store }
    }

    /// Build the storage query for a path.
    pub fn subtree_query(opts: &FetchTreeOptions) -> SubtreeQuery {
        SubtreeQuery {
            root_path: root_segment(&opts.path).to_string(),
            locale: opts.locale.clone(),
        }
    }

    /// No cache is kept; this always reads through to the store.
    fn fetch_tree_cached(&self, opts: &FetchTreeOptions) -> Result<Vec<TreeRow>, StorageError> {
        self.fetch_tree_from_store(opts)
    }

    /// Fetch the branch containing `opts.path` directly from durable storage.
    pub fn fetch_tree_from_store(
        &self,
        opts: &FetchTreeOptions,
    ) -> Result<Vec<TreeRow>, StorageError> {
        let query = Self::subtree_query(opts);
        debug!(
            root_path = %query.root_path,
            path = %opts.path,
            locale = ?query.locale,
            "Querying subtree"
        );

        match self.store.query_subtree(&query) {
            Ok(nodes) => Ok(nodes.into_iter().map(TreeRow::from).collect()),
            Err(err) => {
                warn!(
                    root_path = %query.root_path,
                    path = %opts.path,
                    derived_root = %root_segment(&opts.path),
                    error = %err,
                    "Subtree query failed"
                );
                Err(err)
            }
        }
    }
}

impl TreeSource for SubtreeResolver {
    fn fetch_tree(&self, opts: &FetchTreeOptions) -> Result<Vec<TreeRow>, StorageError> {
        self.fetch_tree_cached(opts)
    }
}
