use pagetree::store::persistence::SledTreeNodeStore;
use pagetree::{NewTreeNode, PageTreeApi, TreeNode, TreeRow};
use std::sync::Arc;
use tempfile::TempDir;

pub fn create_test_api() -> (PageTreeApi, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = SledTreeNodeStore::new(&temp_dir.path().join("store")).unwrap();
    (PageTreeApi::new(Arc::new(store)), temp_dir)
}

/// Insert `path` in `locale`, linking it to an already inserted parent when there is one.
pub fn add(api: &PageTreeApi, locale: &str, path: &str) -> TreeNode {
    let mut fields = NewTreeNode::new(locale, path, path);
    if let Some((parent_path, _)) = path.rsplit_once('/') {
        if let Some(parent) = api.node_by_path(&locale.into(), parent_path).unwrap() {
            fields = fields.with_parent(parent.id);
        }
    }
    api.create_node(fields).unwrap()
}

pub fn row_paths(rows: &[TreeRow]) -> Vec<&str> {
    rows.iter().map(|r| r.path.as_str()).collect()
}
