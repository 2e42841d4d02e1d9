//! Page Tree API
//!
//! Entry point for a content-management layer: subtree fetches plus the
//! create/update calls that keep the index in step with content changes.

use crate::config::PageTreeConfig;
use crate::error::{ApiError, StorageError};
use crate::resolver::{FetchTreeOptions, SubtreeResolver, TreeRow, TreeSource};
use crate::store::persistence::SledTreeNodeStore;
use crate::store::{NewTreeNode, TreeNode, TreeNodeStore};
use crate::types::{LocaleCode, NodeId};
use std::path::Path;
use std::sync::Arc;

/// Page tree API over a Tree Index Store
#[derive(Clone)]
pub struct PageTreeApi {
    store: Arc<dyn TreeNodeStore>,
    resolver: SubtreeResolver,
}

impl PageTreeApi {
    pub fn new(store: Arc<dyn TreeNodeStore>) -> Self {
        let resolver = SubtreeResolver::new(Arc::clone(&store));
        Self { store, resolver }
    }

    /// Open the sled store configured for a site.
    pub fn open(config: &PageTreeConfig, site_root: &Path) -> Result<Self, ApiError> {
        let store_path = config.storage.resolve_store_path(site_root)?;
        std::fs::create_dir_all(&store_path).map_err(StorageError::IoError)?;
        let store = SledTreeNodeStore::new(&store_path)?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn store(&self) -> &Arc<dyn TreeNodeStore> {
        &self.store
    }

    pub fn resolver(&self) -> &SubtreeResolver {
        &self.resolver
    }

    /// Every node in the top-level branch containing `opts.path`, ordered by path.
    pub fn fetch_tree(&self, opts: &FetchTreeOptions) -> Result<Vec<TreeRow>, ApiError> {
        Ok(self.resolver.fetch_tree(opts)?)
    }

    pub fn create_node(&self, fields: NewTreeNode) -> Result<TreeNode, ApiError> {
        self.store.insert(fields)
    }

    pub fn update_node(&self, node: &TreeNode) -> Result<TreeNode, ApiError> {
        self.store.update(node)
    }

    /// Remove one node. Descendants are not touched.
    pub fn delete_node(&self, id: NodeId) -> Result<Option<TreeNode>, ApiError> {
        Ok(self.store.delete(id)?)
    }

    /// Flush pending index writes to disk.
    pub fn flush(&self) -> Result<(), ApiError> {
        Ok(self.store.flush()?)
    }

    pub fn node(&self, id: NodeId) -> Result<Option<TreeNode>, ApiError> {
        Ok(self.store.get(id)?)
    }

    pub fn node_by_path(
        &self,
        locale: &LocaleCode,
        path: &str,
    ) -> Result<Option<TreeNode>, ApiError> {
        Ok(self.store.get_by_path(locale, path)?)
    }
}
