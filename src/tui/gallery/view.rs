//! ギャラリー画面の描画

use super::app::{Model, Screen};
use super::rows::RowKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// 画面を描画
pub fn view(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // フィルタ
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // ステータス
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    render_filter(f, model, chunks[0]);

    if model.screen == Screen::Browse {
        render_tree(f, model, chunks[1]);
    } else {
        render_sample(f, model, chunks[1]);
    }

    let status = Paragraph::new(model.status.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(status, chunks[2]);

    let help_text = match model.screen {
        Screen::Sample { .. } => " ↑/↓: scroll · Esc: back · q: quit",
        Screen::Browse if model.filter_focused => " type to filter · Enter/↓: list · Esc: clear",
        Screen::Browse => " ↑/↓: move · Enter: open · ←/→: collapse/expand · /: filter · q: quit",
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_sample(f: &mut Frame, model: &Model, area: Rect) {
    if let Screen::Sample {
        title,
        lines,
        scroll,
    } = &model.screen
    {
        let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
            .wrap(Wrap { trim: false })
            .scroll((*scroll, 0));
        f.render_widget(paragraph, area);
    }
}

fn render_filter(f: &mut Frame, model: &Model, area: Rect) {
    let style = if model.filter_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if model.filter_focused { "_" } else { "" };
    let filter = Paragraph::new(format!("{}{}", model.filter_text, cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(" Search "),
    );
    f.render_widget(filter, area);
}

fn render_tree(f: &mut Frame, model: &mut Model, area: Rect) {
    let root_name = model
        .tree
        .as_ref()
        .map(|t| t.name().to_string())
        .unwrap_or_else(|| format!("No samples matched ({} in catalog)", model.catalog().len()));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", root_name));

    let items: Vec<ListItem> = model
        .rows
        .iter()
        .map(|row| {
            let style = match row.kind {
                RowKind::Node { .. } => Style::default().add_modifier(Modifier::BOLD),
                RowKind::Sample(_) => Style::default(),
            };
            ListItem::new(row.label()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut model.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SampleCatalog;
    use crate::sample::SampleContext;
    use crate::test_support::candidate;
    use super::super::app::{update, Msg};
    use ratatui::backend::TestBackend;

    fn rendered(model: &mut Model) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| view(f, model)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn model() -> Model {
        let candidates = vec![
            candidate("samples::Layers", "WMTS Layer"),
            candidate("samples::Maps", "Overview"),
        ];
        Model::new(SampleCatalog::build(&candidates), SampleContext::new("unused"))
    }

    #[test]
    fn test_view_shows_root_and_categories() {
        let screen = rendered(&mut model());
        assert!(screen.contains("All Samples"));
        assert!(screen.contains("Layers (1)"));
    }

    #[test]
    fn test_view_without_match_reports_catalog_size() {
        let mut model = model();
        update(&mut model, Msg::FilterInput('#'));

        let screen = rendered(&mut model);

        assert!(screen.contains("No samples matched (2 in catalog)"));
    }
}
