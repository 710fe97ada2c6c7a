use super::*;
use crate::test_support::descriptor;
use proptest::prelude::*;

/// カテゴリ名とサンプル名の組からツリーを生成
fn tree_strategy() -> impl Strategy<Value = SearchableTree> {
    let category = prop::sample::select(vec!["Analysis", "Data", "Layers", "Maps"]);
    let name = "[A-Za-z][a-z ]{0,9}";
    prop::collection::btree_map(category, prop::collection::vec(name, 0..6), 0..4).prop_map(
        |groups| {
            let children: Vec<SearchableTree> = groups
                .into_iter()
                .map(|(category, names)| {
                    SearchableTree::new(
                        category,
                        names
                            .iter()
                            .map(|n| descriptor(category, n))
                            .collect::<Vec<_>>(),
                    )
                })
                .collect();
            SearchableTree::new("All Samples", children)
        },
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,3}".prop_map(|s| s)
}

proptest! {
    /// 同じ述語で 2 回絞り込んでも結果は変わらない
    #[test]
    fn prop_filter_is_idempotent(tree in tree_strategy(), query in query_strategy()) {
        let predicate = |s: &SampleDescriptor| s.matches_text(&query);
        if let Some(once) = tree.filter(predicate) {
            let twice = once.filter(predicate);
            prop_assert_eq!(twice, Some(once));
        }
    }

    /// 絞り込みは元のツリーを変更しない
    #[test]
    fn prop_filter_leaves_source_untouched(tree in tree_strategy(), query in query_strategy()) {
        let before = tree.clone();
        let _ = tree.filter(|s| s.matches_text(&query));
        prop_assert_eq!(tree, before);
    }

    /// 結果に含まれるサンプルはすべて述語を満たし、件数は元を超えない
    #[test]
    fn prop_filter_returns_only_matches(tree in tree_strategy(), query in query_strategy()) {
        let expected = tree
            .all_samples()
            .iter()
            .filter(|s| s.matches_text(&query))
            .count();

        match tree.filter(|s| s.matches_text(&query)) {
            Some(filtered) => {
                prop_assert!(filtered.all_samples().iter().all(|s| s.matches_text(&query)));
                prop_assert_eq!(filtered.sample_count(), expected);
                prop_assert!(filtered.items().len() <= tree.items().len());
            }
            None => prop_assert_eq!(expected, 0),
        }
    }

    /// 常に真の述語は空でないツリーをそのまま再現する
    #[test]
    fn prop_filter_true_reproduces_tree(tree in tree_strategy()) {
        let non_empty: Vec<&SearchableTree> =
            tree.sub_trees().filter(|t| t.sample_count() > 0).collect();

        match tree.filter(|_| true) {
            Some(filtered) => {
                let kept: Vec<&SearchableTree> = filtered.sub_trees().collect();
                prop_assert_eq!(kept, non_empty);
            }
            None => prop_assert!(non_empty.is_empty()),
        }
    }
}
