//! サンプルカタログ
//!
//! 起動時に一度だけ構築され、UI 層へ明示的に渡される。
//!
//! ## モジュール構成
//!
//! - `candidate`: 静的登録レコードと供給元 trait
//! - `builder`: 記述子生成・ソート・カテゴリツリー構築
//! - `tree`: 検索可能なツリー
//! - `activator`: サンプル画面の生成
//! - `expansion`: UI 用の展開状態と変更通知

mod activator;
mod builder;
mod candidate;
mod expansion;
mod tree;

pub use activator::activate;
pub use builder::{build_catalog, build_full_tree, category_from_namespace, BuiltCatalog, ROOT_NAME};
pub use candidate::{SampleCandidate, SampleSource};
pub use expansion::{ExpansionChange, ExpansionState, ObserverId};
pub use tree::{SearchableTree, TreeItem};

use crate::error::{GalleryError, Result};
use crate::sample::SampleDescriptor;
use std::sync::Arc;

/// サンプルカタログ
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    samples: Vec<Arc<SampleDescriptor>>,
    full_tree: SearchableTree,
}

impl SampleCatalog {
    /// 候補の供給元からカタログを構築
    pub fn build(source: &dyn SampleSource) -> Self {
        let BuiltCatalog { samples, tree } = build_catalog(source);
        Self {
            samples,
            full_tree: tree,
        }
    }

    /// カテゴリ別の全体ツリー
    pub fn full_tree(&self) -> &SearchableTree {
        &self.full_tree
    }

    /// 全サンプル（カテゴリ → 名前順）
    pub fn samples(&self) -> &[Arc<SampleDescriptor>] {
        &self.samples
    }

    /// カテゴリ名一覧（昇順）
    pub fn categories(&self) -> Vec<&str> {
        self.full_tree.sub_trees().map(|tree| tree.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 検索テキストでツリーを絞り込む
    ///
    /// 名前・説明・タグへの case-insensitive な部分一致。一致なしは `None`。
    pub fn search(&self, text: &str) -> Option<SearchableTree> {
        let text = text.trim();
        self.full_tree.filter(|sample| sample.matches_text(text))
    }

    /// サンプルを名前で検索
    ///
    /// `Name` または `Category/Name` 形式（case-insensitive）。
    /// 名前のみの指定で複数カテゴリに一致した場合は曖昧エラー。
    pub fn find(&self, query: &str) -> Result<&Arc<SampleDescriptor>> {
        let query = query.trim();

        if let Some((category, name)) = query.split_once('/') {
            let found = self
                .categories()
                .into_iter()
                .find(|c| c.eq_ignore_ascii_case(category.trim()))
                .and_then(|c| self.full_tree.find_child(c))
                .and_then(|node| {
                    node.all_samples()
                        .into_iter()
                        .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
                });
            if let Some(found) = found {
                return Ok(found);
            }
        }

        let matches: Vec<&Arc<SampleDescriptor>> = self
            .samples
            .iter()
            .filter(|s| s.name().eq_ignore_ascii_case(query))
            .collect();

        match matches.as_slice() {
            [] => Err(GalleryError::SampleNotFound(query.to_string())),
            [single] => Ok(*single),
            _ => Err(GalleryError::AmbiguousSample {
                name: query.to_string(),
                candidates: matches.iter().map(|s| s.qualified_name()).collect(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
