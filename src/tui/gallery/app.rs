//! サンプルギャラリー TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: カタログ・表示中のツリー・展開状態・画面
//! - `Screen`: ツリー閲覧 / サンプル表示
//! - `Msg`: アプリケーションへのメッセージ

use super::rows::{visible_rows, Row, RowKind};
use crate::catalog::{
    activate, ExpansionChange, ExpansionState, ObserverId, SampleCatalog, SearchableTree,
};
use crate::data::read_marker;
use crate::sample::{SampleContext, SampleDescriptor};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Screen
// ============================================================================

/// アクティブ画面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// カテゴリツリー
    Browse,
    /// 生成したサンプル画面の表示
    Sample {
        title: String,
        lines: Vec<String>,
        scroll: u16,
    },
}

// ============================================================================
// Msg
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Quit,
    Up,
    Down,
    /// 選択行を開く（ノードは展開切替、サンプルは生成）
    Open,
    /// ノードを展開
    Expand,
    /// ノードを折りたたむ
    Collapse,
    /// サンプル画面からツリーへ戻る
    Back,
    FilterFocus,
    FilterUnfocus,
    FilterInput(char),
    FilterBackspace,
    FilterClear,
}

// ============================================================================
// Model
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    catalog: SampleCatalog,
    ctx: SampleContext,
    /// 表示中のツリー（フィルタ結果）。一致なしは `None`
    pub tree: Option<SearchableTree>,
    pub expansion: ExpansionState,
    pub rows: Vec<Row>,
    pub list_state: ListState,
    pub screen: Screen,
    pub filter_text: String,
    pub filter_focused: bool,
    /// ステータス行（展開通知・エラー）
    pub status: Option<String>,
    pub should_quit: bool,
    last_change: Rc<RefCell<Option<ExpansionChange>>>,
    observer: ObserverId,
}

impl Model {
    pub fn new(catalog: SampleCatalog, ctx: SampleContext) -> Self {
        let mut expansion = ExpansionState::new();
        let last_change = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_change);
        let observer = expansion.subscribe(move |change: &ExpansionChange| {
            *sink.borrow_mut() = Some(change.clone());
        });

        let mut model = Self {
            tree: Some(catalog.full_tree().clone()),
            catalog,
            ctx,
            expansion,
            rows: Vec::new(),
            list_state: ListState::default(),
            screen: Screen::Browse,
            filter_text: String::new(),
            filter_focused: false,
            status: None,
            should_quit: false,
            last_change,
            observer,
        };
        model.refresh_rows();
        model
    }

    /// 初期フィルタを設定
    pub fn with_filter(mut self, text: &str) -> Self {
        self.filter_text = text.to_string();
        self.apply_filter();
        self
    }

    pub fn catalog(&self) -> &SampleCatalog {
        &self.catalog
    }

    /// 選択中の行
    pub fn selected_row(&self) -> Option<&Row> {
        self.list_state.selected().and_then(|i| self.rows.get(i))
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if let Screen::Sample { .. } = self.screen {
            return match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => Some(Msg::Back),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                _ => None,
            };
        }

        if self.filter_focused {
            // フィルタにフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.filter_text.is_empty() => Some(Msg::FilterClear),
                KeyCode::Esc => Some(Msg::FilterUnfocus),
                KeyCode::Down | KeyCode::Enter => Some(Msg::FilterUnfocus),
                KeyCode::Backspace => Some(Msg::FilterBackspace),
                KeyCode::Char(c) => Some(Msg::FilterInput(c)),
                _ => None,
            }
        } else {
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('/') => Some(Msg::FilterFocus),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Enter => Some(Msg::Open),
                KeyCode::Right | KeyCode::Char('l') => Some(Msg::Expand),
                KeyCode::Left | KeyCode::Char('h') => Some(Msg::Collapse),
                KeyCode::Esc if !self.filter_text.is_empty() => Some(Msg::FilterClear),
                _ => None,
            }
        }
    }

    /// フィルタ変更後にツリーを再計算
    fn apply_filter(&mut self) {
        self.tree = self.catalog.search(&self.filter_text);
        self.list_state.select(None);
        self.refresh_rows();
    }

    /// 表示行を再計算し、選択位置を整合させる
    fn refresh_rows(&mut self) {
        let expand_all = !self.filter_text.trim().is_empty();
        self.rows = match &self.tree {
            Some(tree) => visible_rows(tree, &self.expansion, expand_all),
            None => Vec::new(),
        };

        let selected = match (self.list_state.selected(), self.rows.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn set_node_expanded(&mut self, key: &str, expanded: bool) {
        self.expansion.set_expanded(key, expanded);
        self.after_expansion_change();
    }

    fn toggle_node(&mut self, key: &str) {
        self.expansion.toggle(key);
        self.after_expansion_change();
    }

    /// 展開状態の変更通知をステータスへ反映
    fn after_expansion_change(&mut self) {
        if let Some(change) = self.last_change.borrow_mut().take() {
            let verb = if change.expanded { "Expanded" } else { "Collapsed" };
            self.status = Some(format!("{} {}", verb, change.node));
        }
        self.refresh_rows();
    }

    /// 未ダウンロードのオフラインデータ
    ///
    /// ダウンロードはターミナル画面と両立しないため、`sgal run` に任せる。
    fn missing_offline_data<'a>(&self, sample: &'a SampleDescriptor) -> Vec<&'a str> {
        sample
            .offline_data_ids()
            .iter()
            .filter(|id| read_marker(&self.ctx.item_dir(id)).is_none())
            .map(String::as_str)
            .collect()
    }

    fn open_sample(&mut self, sample: &SampleDescriptor) {
        let missing = self.missing_offline_data(sample);
        if !missing.is_empty() {
            tracing::debug!(sample = %sample.qualified_name(), ?missing, "offline data not downloaded");
            self.status = Some(format!(
                "Offline data for '{}' is not downloaded. Run `sgal run \"{}\"` first.",
                sample.name(),
                sample.qualified_name()
            ));
            return;
        }

        let rendered = activate(sample).and_then(|view| {
            let lines = view.render(&self.ctx)?;
            Ok((view.title().to_string(), lines))
        });

        match rendered {
            Ok((title, lines)) => {
                self.status = None;
                self.screen = Screen::Sample {
                    title,
                    lines,
                    scroll: 0,
                };
            }
            Err(e) => {
                tracing::warn!(sample = %sample.qualified_name(), error = %e, "activation failed");
                self.status = Some(e.to_string());
            }
        }
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.expansion.unsubscribe(self.observer);
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::Up => match &mut model.screen {
            Screen::Sample { scroll, .. } => *scroll = scroll.saturating_sub(1),
            Screen::Browse => {
                if let Some(i) = model.list_state.selected() {
                    model.list_state.select(Some(i.saturating_sub(1)));
                }
            }
        },
        Msg::Down => match &mut model.screen {
            Screen::Sample { scroll, lines, .. } => {
                if usize::from(*scroll) + 1 < lines.len() {
                    *scroll += 1;
                }
            }
            Screen::Browse => {
                if let Some(i) = model.list_state.selected() {
                    if i + 1 < model.rows.len() {
                        model.list_state.select(Some(i + 1));
                    }
                }
            }
        },
        Msg::Open => match model.selected_row().map(|row| row.kind.clone()) {
            Some(RowKind::Node { key, .. }) => model.toggle_node(&key),
            Some(RowKind::Sample(sample)) => model.open_sample(&sample),
            None => {}
        },
        Msg::Expand | Msg::Collapse => {
            if let Some(RowKind::Node { key, .. }) = model.selected_row().map(|row| row.kind.clone()) {
                model.set_node_expanded(&key, msg == Msg::Expand);
            }
        }
        Msg::Back => model.screen = Screen::Browse,
        Msg::FilterFocus => model.filter_focused = true,
        Msg::FilterUnfocus => model.filter_focused = false,
        Msg::FilterInput(c) => {
            model.filter_text.push(c);
            model.apply_filter();
        }
        Msg::FilterBackspace => {
            model.filter_text.pop();
            model.apply_filter();
        }
        Msg::FilterClear => {
            model.filter_text.clear();
            model.apply_filter();
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
