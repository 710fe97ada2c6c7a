//! サンプルギャラリーの閲覧画面
//!
//! カテゴリツリーの展開・折りたたみ、検索テキストによる絞り込み、
//! サンプルの生成と表示を行う。

mod app;
mod rows;
mod view;

use crate::catalog::SampleCatalog;
use crate::sample::SampleContext;
use app::{update, Model};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{self, stdout};

/// ギャラリーを起動
pub fn run(catalog: SampleCatalog, ctx: SampleContext, filter: Option<&str>) -> io::Result<()> {
    let model = Model::new(catalog, ctx).with_filter(filter.unwrap_or_default());

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(model);

    // ターミナルを復元（ループのエラーに関わらず実行）
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(mut model: Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    while !model.should_quit {
        terminal.draw(|f| view::view(f, &mut model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(&mut model, msg);
                }
            }
        }
    }

    Ok(())
}
