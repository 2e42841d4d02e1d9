use crate::support::{add, create_test_api, row_paths};
use pagetree::{ApiError, FetchTreeOptions, LocaleCode, NewTreeNode, StorageError, ValidationError};

#[test]
fn create_node_requires_path_and_depth() {
    let (api, _temp) = create_test_api();
    let result = api.create_node(NewTreeNode {
        title: Some("X".to_string()),
        ..Default::default()
    });

    match result {
        Err(ApiError::Validation(ValidationError::MissingField(field))) => {
            assert_eq!(field, "path")
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
    assert!(api.fetch_tree(&FetchTreeOptions::new("X")).unwrap().is_empty());
}

#[test]
fn created_then_updated_timestamps() {
    let (api, _temp) = create_test_api();
    let created = add(&api, "en", "docs");
    assert_eq!(created.created_at, created.updated_at);

    let mut changed = created.clone();
    changed.title = "Documentation".to_string();
    changed.is_private = true;
    changed.private_ns = Some("editors".to_string());
    let updated = api.update_node(&changed).unwrap();

    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let stored = api.node(created.id).unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.private_ns.as_deref(), Some("editors"));
}

#[test]
fn rename_does_not_cascade() {
    let (api, _temp) = create_test_api();
    let docs = add(&api, "en", "docs");
    add(&api, "en", "docs/install");

    let mut renamed = docs.clone();
    renamed.path = "manual".to_string();
    api.update_node(&renamed).unwrap();

    let manual = api.fetch_tree(&FetchTreeOptions::new("manual")).unwrap();
    assert_eq!(row_paths(&manual), vec!["manual"]);

    let docs_rows = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    assert_eq!(row_paths(&docs_rows), vec!["docs/install"]);
    assert_eq!(docs_rows[0].parent, Some(docs.id));
}

#[test]
fn duplicate_path_rejected_per_locale() {
    let (api, _temp) = create_test_api();
    add(&api, "en", "docs");

    match api.create_node(NewTreeNode::new("en", "docs", "Again")) {
        Err(ApiError::StorageError(StorageError::PathConflict { .. })) => {}
        other => panic!("Expected PathConflict, got {:?}", other),
    }
    api.create_node(NewTreeNode::new("fr", "docs", "Docs")).unwrap();

    let rows = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn delete_leaves_descendants() {
    let (api, _temp) = create_test_api();
    let docs = add(&api, "en", "docs");
    add(&api, "en", "docs/install");

    let removed = api.delete_node(docs.id).unwrap().unwrap();
    assert_eq!(removed.path, "docs");
    assert!(api
        .node_by_path(&LocaleCode::new("en"), "docs")
        .unwrap()
        .is_none());

    let rows = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    assert_eq!(row_paths(&rows), vec!["docs/install"]);
}
