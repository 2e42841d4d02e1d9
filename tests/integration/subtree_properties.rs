use crate::support::{create_test_api, row_paths};
use pagetree::tree::path::root_segment;
use pagetree::{FetchTreeOptions, NewTreeNode};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof!["a", "b", "a-b", "ab", "b0"], 1..4)
        .prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn fetch_returns_exactly_the_branch_in_path_order(
        paths in proptest::collection::btree_set(path_strategy(), 1..24),
        probe in path_strategy(),
    ) {
        let (api, _temp) = create_test_api();
        for path in &paths {
            api.create_node(NewTreeNode::new("en", path, path)).unwrap();
        }

        let root = root_segment(&probe);
        let descendant_prefix = format!("{}/", root);
        let expected: Vec<&str> = paths
            .iter()
            .filter(|p| p.as_str() == root || p.starts_with(&descendant_prefix))
            .map(String::as_str)
            .collect();

        let rows = api.fetch_tree(&FetchTreeOptions::new(probe.clone())).unwrap();
        prop_assert_eq!(row_paths(&rows), expected);

        let again = api.fetch_tree(&FetchTreeOptions::new(probe)).unwrap();
        prop_assert_eq!(rows, again);
    }

    #[test]
    fn all_roots_partition_the_index(
        paths in proptest::collection::btree_set(path_strategy(), 1..24),
    ) {
        let (api, _temp) = create_test_api();
        for path in &paths {
            api.create_node(NewTreeNode::new("en", path, path)).unwrap();
        }

        let roots: BTreeSet<&str> = paths.iter().map(|p| root_segment(p)).collect();
        let mut seen = Vec::new();
        for root in roots {
            let rows = api.fetch_tree(&FetchTreeOptions::new(root)).unwrap();
            seen.extend(rows.into_iter().map(|r| r.path));
        }
        seen.sort();
        let all: Vec<String> = paths.into_iter().collect();
        prop_assert_eq!(seen, all);
    }
}
