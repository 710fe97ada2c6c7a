//! 検索可能なツリー
//!
//! カテゴリ（サブツリー）とサンプル記述子を子に持つ不変のツリー。
//! `filter` は元のツリーを変更せず、一致部分のみを持つ新しいツリーを返す。

use crate::sample::SampleDescriptor;
use serde::Serialize;
use std::sync::Arc;

/// ツリーの子要素
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeItem {
    /// サブツリー（カテゴリ）
    Node(SearchableTree),
    /// サンプル記述子
    Sample(Arc<SampleDescriptor>),
}

impl From<SearchableTree> for TreeItem {
    fn from(tree: SearchableTree) -> Self {
        TreeItem::Node(tree)
    }
}

impl From<Arc<SampleDescriptor>> for TreeItem {
    fn from(sample: Arc<SampleDescriptor>) -> Self {
        TreeItem::Sample(sample)
    }
}

/// 検索可能なツリーノード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchableTree {
    name: String,
    items: Vec<TreeItem>,
}

impl SearchableTree {
    /// 子要素を与えられた順序のまま保持するノードを作成
    pub fn new<I>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TreeItem>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[TreeItem] {
        &self.items
    }

    /// 直下のサブツリー
    pub fn sub_trees(&self) -> impl Iterator<Item = &SearchableTree> {
        self.items.iter().filter_map(|item| match item {
            TreeItem::Node(tree) => Some(tree),
            TreeItem::Sample(_) => None,
        })
    }

    /// 直下のサンプル
    pub fn samples(&self) -> impl Iterator<Item = &Arc<SampleDescriptor>> {
        self.items.iter().filter_map(|item| match item {
            TreeItem::Sample(sample) => Some(sample),
            TreeItem::Node(_) => None,
        })
    }

    /// 配下の全サンプル（深さ優先）
    pub fn all_samples(&self) -> Vec<&Arc<SampleDescriptor>> {
        let mut out = Vec::new();
        self.collect_samples(&mut out);
        out
    }

    fn collect_samples<'a>(&'a self, out: &mut Vec<&'a Arc<SampleDescriptor>>) {
        for item in &self.items {
            match item {
                TreeItem::Node(tree) => tree.collect_samples(out),
                TreeItem::Sample(sample) => out.push(sample),
            }
        }
    }

    /// 配下のサンプル数（再帰）
    pub fn sample_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                TreeItem::Node(tree) => tree.sample_count(),
                TreeItem::Sample(_) => 1,
            })
            .sum()
    }

    /// 名前で直下のサブツリーを検索
    pub fn find_child(&self, name: &str) -> Option<&SearchableTree> {
        self.sub_trees().find(|tree| tree.name == name)
    }

    /// 述語に一致するサンプルのみを持つツリーを返す
    ///
    /// 1. サブツリーを持つ場合は再帰的に絞り込み、一致が残ったサブツリーだけを持つノードを返す。
    ///    このときは同じ階層のサンプルは判定しない。
    /// 2. サブツリーが残らなければ、直下のサンプルから一致するものだけを持つノードを返す。
    /// 3. どちらも空なら `None`。
    pub fn filter<P>(&self, predicate: P) -> Option<SearchableTree>
    where
        P: Fn(&SampleDescriptor) -> bool,
    {
        self.filter_with(&predicate)
    }

    fn filter_with(&self, predicate: &dyn Fn(&SampleDescriptor) -> bool) -> Option<SearchableTree> {
        let sub_trees: Vec<SearchableTree> = self
            .sub_trees()
            .filter_map(|tree| tree.filter_with(predicate))
            .collect();
        if !sub_trees.is_empty() {
            return Some(SearchableTree::new(self.name.clone(), sub_trees));
        }

        let matching: Vec<Arc<SampleDescriptor>> = self
            .samples()
            .filter(|sample| predicate(sample.as_ref()))
            .cloned()
            .collect();
        if !matching.is_empty() {
            return Some(SearchableTree::new(self.name.clone(), matching));
        }

        None
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;

#[cfg(test)]
#[path = "tree_proptests.rs"]
mod proptests;
