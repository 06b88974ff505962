//! 工具栏组件：搜索框、排序方向、添加按钮

use domain_manager_core::SortOrder;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染工具栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let sort_label = match app.domains.query.sort_order {
        SortOrder::Asc => texts.domains.order_asc,
        SortOrder::Desc => texts.domains.order_desc,
    };
    // 边框 2 + 快捷键提示
    let sort_width = (sort_label.width() + "Alt+s ".len() + 4) as u16;
    let add_width = (texts.domains.add_domain.width() + "Alt+a ".len() + 4) as u16;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(sort_width),
            Constraint::Length(add_width),
        ])
        .split(area);

    render_search(app, frame, columns[0]);
    render_button(frame, columns[1], "Alt+s", sort_label, false);
    render_button(frame, columns[2], "Alt+a", texts.domains.add_domain, true);
}

/// 渲染搜索框
fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_search() && !app.drawer.is_open() && !app.modal.is_open();
    let search_text = &app.domains.query.search_text;

    let block = Block::default()
        .title(format!(" {} ", texts.domains.search))
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let content = if search_text.is_empty() && !focused {
        Line::styled(texts.domains.search_placeholder, Styles::muted())
    } else {
        Line::styled(search_text.as_str(), Style::default().fg(c.fg))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused {
        let offset = (search_text.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

/// 渲染工具栏按钮
fn render_button(frame: &mut Frame, area: Rect, key: &str, label: &str, primary: bool) {
    let c = colors();
    let label_style = if primary {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let line = Line::from(vec![
        Span::styled(key.to_string(), Styles::hint_key()),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(Styles::border());
    frame.render_widget(Paragraph::new(line).block(block), area);
}
