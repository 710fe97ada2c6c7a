//! ツリーの表示行
//!
//! 展開状態に従ってツリーを平坦化し、リスト表示用の行に変換する。

use crate::catalog::{ExpansionState, SearchableTree, TreeItem};
use crate::sample::SampleDescriptor;
use std::sync::Arc;

/// 表示行の種別
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// カテゴリ（`key` は展開状態のキー）
    Node {
        key: String,
        name: String,
        count: usize,
        expanded: bool,
    },
    Sample(Arc<SampleDescriptor>),
}

/// 表示行
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub depth: usize,
    pub kind: RowKind,
}

impl Row {
    /// リスト表示用のテキスト
    pub fn label(&self) -> String {
        let indent = "  ".repeat(self.depth);
        match &self.kind {
            RowKind::Node {
                name,
                count,
                expanded,
                ..
            } => {
                let marker = if *expanded { "▾" } else { "▸" };
                format!("{}{} {} ({})", indent, marker, name, count)
            }
            RowKind::Sample(sample) => format!("{}  {}", indent, sample.name()),
        }
    }
}

/// ルート直下からの表示行を作成
///
/// `expand_all` が真の場合（検索中）は展開状態に関わらず全ノードを展開して表示する。
pub fn visible_rows(tree: &SearchableTree, expansion: &ExpansionState, expand_all: bool) -> Vec<Row> {
    let mut rows = Vec::new();
    push_rows(tree, "", 0, expansion, expand_all, &mut rows);
    rows
}

fn push_rows(
    tree: &SearchableTree,
    parent_key: &str,
    depth: usize,
    expansion: &ExpansionState,
    expand_all: bool,
    rows: &mut Vec<Row>,
) {
    for item in tree.items() {
        match item {
            TreeItem::Node(node) => {
                let key = node_key(parent_key, node.name());
                let expanded = expand_all || expansion.is_expanded(&key);
                rows.push(Row {
                    depth,
                    kind: RowKind::Node {
                        key: key.clone(),
                        name: node.name().to_string(),
                        count: node.sample_count(),
                        expanded,
                    },
                });
                if expanded {
                    push_rows(node, &key, depth + 1, expansion, expand_all, rows);
                }
            }
            TreeItem::Sample(sample) => rows.push(Row {
                depth,
                kind: RowKind::Sample(Arc::clone(sample)),
            }),
        }
    }
}

/// ノードの展開状態キー（親からのパス）
pub fn node_key(parent_key: &str, name: &str) -> String {
    if parent_key.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent_key, name)
    }
}
