use pagetree::config::{ConfigLoader, PageTreeConfig, StorageConfig};
use pagetree::{FetchTreeOptions, NewTreeNode, PageTreeApi};
use std::path::PathBuf;
use tempfile::TempDir;

fn site_config() -> PageTreeConfig {
    PageTreeConfig {
        storage: StorageConfig {
            store_path: PathBuf::from("index"),
        },
        ..ConfigLoader::default()
    }
}

#[test]
fn open_creates_store_under_site_root() {
    let temp_dir = TempDir::new().unwrap();
    let api = PageTreeApi::open(&site_config(), temp_dir.path()).unwrap();
    api.create_node(NewTreeNode::new("en", "docs", "Docs")).unwrap();

    assert!(temp_dir.path().join("index").is_dir());
}

#[test]
fn reopened_site_sees_previous_nodes() {
    let temp_dir = TempDir::new().unwrap();
    {
        let api = PageTreeApi::open(&site_config(), temp_dir.path()).unwrap();
        let docs = api
            .create_node(NewTreeNode::new("en", "docs", "Docs").folder())
            .unwrap();
        api.create_node(NewTreeNode::new("en", "docs/faq", "FAQ").with_parent(docs.id))
            .unwrap();
        api.flush().unwrap();
    }

    let api = PageTreeApi::open(&site_config(), temp_dir.path()).unwrap();
    let rows = api.fetch_tree(&FetchTreeOptions::new("docs/faq")).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].title, "FAQ");
}
