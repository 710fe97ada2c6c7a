use super::*;
use crate::test_support::candidate;
use proptest::prelude::*;
use std::collections::HashSet;

/// カテゴリ名（名前空間の最終セグメント）
fn category_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,7}".prop_map(|s| s)
}

/// サンプル名
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,11}".prop_map(|s| s)
}

fn candidates_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((category_strategy(), name_strategy()), 0..24)
}

proptest! {
    /// 有効な候補が K 種類のカテゴリにまたがる場合、K 個の子と重複を除いた件数のサンプルを持つ
    #[test]
    fn prop_tree_has_one_child_per_category(entries in candidates_strategy()) {
        let candidates: Vec<SampleCandidate> = entries
            .iter()
            .map(|(category, name)| candidate(&format!("samples::{}", category), name))
            .collect();

        let built = build_catalog(&candidates);

        let expected: HashSet<String> = entries
            .iter()
            .map(|(category, _)| category.replace('_', " "))
            .collect();
        // カテゴリ内で同名（大文字小文字を区別しない）の候補は1件にまとまる
        let unique: HashSet<(String, String)> = entries
            .iter()
            .map(|(category, name)| (category.replace('_', " "), name.to_lowercase()))
            .collect();
        prop_assert_eq!(built.tree.items().len(), expected.len());
        prop_assert_eq!(built.tree.sample_count(), unique.len());
        prop_assert_eq!(built.samples.len(), unique.len());

        for node in built.tree.sub_trees() {
            prop_assert!(node.samples().all(|s| s.category() == node.name()));
            prop_assert_eq!(node.sub_trees().count(), 0);
        }
    }

    /// カテゴリは昇順、カテゴリ内は名前の case-insensitive 昇順
    #[test]
    fn prop_tree_is_sorted(entries in candidates_strategy()) {
        let candidates: Vec<SampleCandidate> = entries
            .iter()
            .map(|(category, name)| candidate(&format!("samples::{}", category), name))
            .collect();

        let built = build_catalog(&candidates);

        let categories: Vec<&str> = built.tree.sub_trees().map(|t| t.name()).collect();
        prop_assert!(categories.windows(2).all(|w| w[0] < w[1]));

        for node in built.tree.sub_trees() {
            let names: Vec<String> = node.samples().map(|s| s.name().to_lowercase()).collect();
            prop_assert!(names.windows(2).all(|w| w[0] <= w[1]));
        }

        let flat: Vec<(&str, String)> = built
            .samples
            .iter()
            .map(|s| (s.category(), s.name().to_lowercase()))
            .collect();
        prop_assert!(flat.windows(2).all(|w| w[0] <= w[1]));
    }
}
