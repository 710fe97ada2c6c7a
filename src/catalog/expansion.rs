//! ツリーノードの展開状態
//!
//! ツリー本体は不変値のまま、UI 側の展開状態と変更通知をここで管理する。

use std::collections::HashSet;

/// 展開状態の変更通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionChange {
    /// ノード名
    pub node: String,
    /// 変更後の展開状態
    pub expanded: bool,
}

/// オブザーバーID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&ExpansionChange)>;

/// ノード名ごとの展開状態
#[derive(Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変更通知を購読
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&ExpansionChange) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// 購読を解除（解除できた場合 true）
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn is_expanded(&self, node: &str) -> bool {
        self.expanded.contains(node)
    }

    /// 展開状態を設定
    ///
    /// 値が変わった場合のみ通知する。
    pub fn set_expanded(&mut self, node: &str, expanded: bool) {
        let changed = if expanded {
            self.expanded.insert(node.to_string())
        } else {
            self.expanded.remove(node)
        };

        if changed {
            self.notify(ExpansionChange {
                node: node.to_string(),
                expanded,
            });
        }
    }

    /// 展開状態を反転し、変更後の値を返す
    pub fn toggle(&mut self, node: &str) -> bool {
        let expanded = !self.is_expanded(node);
        self.set_expanded(node, expanded);
        expanded
    }

    fn notify(&mut self, change: ExpansionChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }
}

impl std::fmt::Debug for ExpansionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpansionState")
            .field("expanded", &self.expanded)
            .field("observers", &self.observers.len())
            .finish()
    }
}
