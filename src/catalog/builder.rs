//! カタログビルダー
//!
//! 候補から記述子を生成し、カテゴリごとにツリーへまとめる。
//! 1件の候補の失敗でカタログ全体の構築が失敗することはない。

use super::candidate::{SampleCandidate, SampleSource};
use super::tree::{SearchableTree, TreeItem};
use crate::error::{GalleryError, Result};
use crate::sample::SampleDescriptor;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// ルートノードの表示名
pub const ROOT_NAME: &str = "All Samples";

/// ビルド結果
#[derive(Debug, Clone)]
pub struct BuiltCatalog {
    /// カテゴリ → 名前順にソート済みの記述子
    pub samples: Vec<Arc<SampleDescriptor>>,
    /// カテゴリごとのツリー
    pub tree: SearchableTree,
}

/// 候補一覧からカタログを構築
pub fn build_catalog(source: &dyn SampleSource) -> BuiltCatalog {
    let mut samples = Vec::new();
    let mut identities = HashSet::new();

    for candidate in source.candidates() {
        let namespace = candidate.namespace().to_string();
        match make_descriptor(candidate) {
            Ok(Some(descriptor)) => {
                // 名前はカテゴリ内で一意（大文字小文字を区別しない）
                let identity = (descriptor.category().to_string(), descriptor.name().to_lowercase());
                if identities.insert(identity) {
                    samples.push(Arc::new(descriptor));
                } else {
                    warn!(
                        %namespace,
                        sample = %descriptor.qualified_name(),
                        "duplicate sample name in category, skipped"
                    );
                }
            }
            Ok(None) => {
                debug!(%namespace, "candidate has no sample metadata, skipped");
            }
            Err(e) => {
                warn!(%namespace, error = %e, "could not create sample");
            }
        }
    }

    samples.sort_by(|a, b| compare_samples(a, b));
    let tree = build_full_tree(&samples);

    debug!(
        samples = samples.len(),
        categories = tree.items().len(),
        "sample catalog built"
    );

    BuiltCatalog { samples, tree }
}

/// 候補から記述子を生成
///
/// メタデータを持たない候補は `Ok(None)`。
/// メタデータが不正な候補は `Err`。
pub(crate) fn make_descriptor(candidate: SampleCandidate) -> Result<Option<SampleDescriptor>> {
    let parts = candidate.into_parts();

    let Some(metadata) = parts.metadata else {
        return Ok(None);
    };

    if metadata.name.trim().is_empty() {
        return Err(GalleryError::InvalidMetadata(format!(
            "sample name is empty (namespace: '{}')",
            parts.namespace
        )));
    }

    let category = category_from_namespace(&parts.namespace);
    if category.trim().is_empty() {
        return Err(GalleryError::InvalidMetadata(format!(
            "cannot derive category from namespace '{}'",
            parts.namespace
        )));
    }

    for id in &parts.offline_data {
        if !is_valid_item_id(id) {
            return Err(GalleryError::InvalidMetadata(format!(
                "invalid offline data id '{}' for sample '{}'",
                id, metadata.name
            )));
        }
    }

    let descriptor = SampleDescriptor::new(metadata, category, parts.factory)
        .with_offline_data(parts.offline_data)
        .with_auxiliary_files(parts.auxiliary_files)
        .with_path(parts.path)
        .with_image(parts.image);

    Ok(Some(descriptor))
}

/// 名前空間の最終セグメントからカテゴリ名を導出
///
/// セグメント区切りは `::` または `.`。`_` はスペースに置換する。
pub fn category_from_namespace(namespace: &str) -> String {
    namespace
        .rsplit([':', '.'])
        .next()
        .unwrap_or_default()
        .replace('_', " ")
}

/// データアイテムIDの検証（英数字のみ）
fn is_valid_item_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// カテゴリ（大文字小文字を区別）→ 名前（区別しない）の順で比較
fn compare_samples(a: &SampleDescriptor, b: &SampleDescriptor) -> Ordering {
    a.category()
        .cmp(b.category())
        .then_with(|| compare_names(a, b))
}

/// 名前を大文字小文字を区別せずに比較（同一なら区別して比較）
fn compare_names(a: &SampleDescriptor, b: &SampleDescriptor) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
}

/// カテゴリごとに1階層のツリーを構築
pub fn build_full_tree(samples: &[Arc<SampleDescriptor>]) -> SearchableTree {
    let mut by_category: BTreeMap<&str, Vec<Arc<SampleDescriptor>>> = BTreeMap::new();
    for sample in samples {
        by_category
            .entry(sample.category())
            .or_default()
            .push(Arc::clone(sample));
    }

    // サブカテゴリは未対応（カテゴリ直下にサンプルのみ）
    let categories = by_category.into_iter().map(|(category, mut members)| {
        members.sort_by(|a, b| compare_names(a, b));
        TreeItem::Node(SearchableTree::new(
            category,
            members.into_iter().map(TreeItem::Sample),
        ))
    });

    SearchableTree::new(ROOT_NAME, categories)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

#[cfg(test)]
#[path = "builder_proptests.rs"]
mod proptests;
