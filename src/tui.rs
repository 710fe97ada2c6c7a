//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用したサンプルギャラリーの閲覧画面を提供する。

mod gallery;

pub use gallery::run as run_gallery;
