use crate::support::{add, create_test_api, row_paths};
use pagetree::{FetchTreeOptions, NodeKind, NewTreeNode, PageId};

#[test]
fn leaf_path_returns_whole_branch_excluding_other_roots() {
    let (api, _temp) = create_test_api();
    for path in ["docs", "docs/install", "docs/install/linux", "blog"] {
        add(&api, "en", path);
    }

    let rows = api
        .fetch_tree(&FetchTreeOptions::new("docs/install/linux"))
        .unwrap();
    assert_eq!(
        row_paths(&rows),
        vec!["docs", "docs/install", "docs/install/linux"]
    );
}

#[test]
fn any_path_in_branch_yields_the_same_rows() {
    let (api, _temp) = create_test_api();
    for path in ["docs", "docs/guides", "docs/install", "docs/install/linux", "blog"] {
        add(&api, "en", path);
    }

    let from_root = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    let from_leaf = api
        .fetch_tree(&FetchTreeOptions::new("docs/install/linux"))
        .unwrap();
    let from_missing = api
        .fetch_tree(&FetchTreeOptions::new("docs/not/indexed"))
        .unwrap();

    assert_eq!(
        row_paths(&from_root),
        vec!["docs", "docs/guides", "docs/install", "docs/install/linux"]
    );
    assert_eq!(from_root, from_leaf);
    assert_eq!(from_root, from_missing);
}

#[test]
fn root_node_is_the_only_parentless_row() {
    let (api, _temp) = create_test_api();
    let docs = add(&api, "en", "docs");
    add(&api, "en", "docs/install");
    add(&api, "en", "docs/install/linux");

    let rows = api.fetch_tree(&FetchTreeOptions::new("docs/install")).unwrap();
    let roots: Vec<_> = rows.iter().filter(|r| r.parent.is_none()).collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, docs.id);
    assert_eq!(roots[0].depth, 0);
    for row in &rows[1..] {
        assert!(rows.iter().any(|p| Some(p.id) == row.parent));
    }
}

#[test]
fn rows_carry_privacy_folder_and_page_columns() {
    let (api, _temp) = create_test_api();
    let docs = api
        .create_node(NewTreeNode::new("en", "docs", "Docs").folder())
        .unwrap();
    api.create_node(
        NewTreeNode::new("en", "docs/internal", "Internal")
            .with_parent(docs.id)
            .with_page(PageId(42))
            .private_to("staff"),
    )
    .unwrap();

    let rows = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].kind(), NodeKind::Folder);
    assert_eq!(rows[0].page_id, None);
    assert!(!rows[0].is_private);

    assert_eq!(rows[1].title, "Internal");
    assert_eq!(rows[1].kind(), NodeKind::Page);
    assert_eq!(rows[1].page_id, Some(PageId(42)));
    assert!(rows[1].is_private);
    assert_eq!(rows[1].private_ns.as_deref(), Some("staff"));
    assert_eq!(rows[1].locale_code.as_str(), "en");
}

#[test]
fn locale_option_scopes_rows() {
    let (api, _temp) = create_test_api();
    for path in ["docs", "docs/install"] {
        add(&api, "en", path);
    }
    for path in ["docs", "docs/installer", "docs/installer/windows"] {
        add(&api, "de", path);
    }

    let de = api
        .fetch_tree(&FetchTreeOptions::new("docs/installer").in_locale("de"))
        .unwrap();
    assert_eq!(
        row_paths(&de),
        vec!["docs", "docs/installer", "docs/installer/windows"]
    );
    assert!(de.iter().all(|r| r.locale_code.as_str() == "de"));

    let all = api.fetch_tree(&FetchTreeOptions::new("docs")).unwrap();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|w| w[0].path <= w[1].path));
}

#[test]
fn unknown_root_and_leading_slash_return_nothing() {
    let (api, _temp) = create_test_api();
    add(&api, "en", "docs");

    assert!(api
        .fetch_tree(&FetchTreeOptions::new("wiki/page"))
        .unwrap()
        .is_empty());
    assert!(api
        .fetch_tree(&FetchTreeOptions::new("/docs"))
        .unwrap()
        .is_empty());
    assert!(api.fetch_tree(&FetchTreeOptions::new("")).unwrap().is_empty());
}
