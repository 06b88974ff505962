//! 创建抽屉组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::truncate_to_width;
use crate::i18n::t;
use crate::model::{App, DrawerField};
use crate::view::theme::{colors, Styles};

/// 渲染创建抽屉
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let drawer = &app.drawer;

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.drawer.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 空行
            Constraint::Length(1), // 标签
            Constraint::Length(3), // 输入框
            Constraint::Length(2), // 校验错误
            Constraint::Length(1), // 按钮
            Constraint::Min(0),
        ])
        .split(inner);

    // 标签（必填）
    let label = Line::from(vec![
        Span::raw(" "),
        Span::styled(texts.drawer.domain_label, Style::default().fg(c.fg)),
        Span::styled(" *", Style::default().fg(c.error)),
    ]);
    frame.render_widget(Paragraph::new(label), rows[1]);

    // === 输入框 ===
    let input_focused = drawer.focus == DrawerField::Domain && !app.modal.is_open();
    let input_border = if drawer.error.is_some() {
        Style::default().fg(c.error)
    } else if input_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let input_block = Block::default().borders(Borders::ALL).border_style(input_border);
    let input_inner = input_block.inner(rows[2]);
    let max_width = input_inner.width as usize;

    let input_line = if drawer.domain.is_empty() {
        Line::styled(texts.drawer.domain_placeholder, Styles::muted())
    } else {
        Line::styled(truncate_to_width(&drawer.domain, max_width), Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(input_line).block(input_block), rows[2]);

    if input_focused && !drawer.submitting {
        let offset = (drawer.domain.width() as u16).min(input_inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(input_inner.x + offset, input_inner.y));
    }

    // === 校验错误 ===
    if let Some(ref error) = drawer.error {
        let line = Line::styled(format!(" {error}"), Style::default().fg(c.error));
        frame.render_widget(Paragraph::new(line), rows[3]);
    }

    // === 按钮 ===
    let submit_label = if drawer.submitting {
        texts.drawer.submitting
    } else {
        texts.drawer.submit
    };
    let buttons = Line::from(vec![
        Span::raw(" "),
        button(submit_label, drawer.focus == DrawerField::Submit, true),
        Span::raw("  "),
        button(texts.common.cancel, drawer.focus == DrawerField::Cancel, false),
    ]);
    frame.render_widget(Paragraph::new(buttons), rows[4]);
}

fn button(label: &str, focused: bool, primary: bool) -> Span<'static> {
    let c = colors();
    let accent = if primary { c.highlight } else { c.fg };
    let style = if focused {
        Style::default()
            .fg(c.selected_fg)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    };
    Span::styled(format!(" {label} "), style)
}
