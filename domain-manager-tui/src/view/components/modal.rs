//! 弹窗组件

use domain_manager_core::RowAction;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, truncate_to_width};
use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ActionMenu { .. } => render_action_menu(frame, modal),
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::Help => render_help(frame),
    }
}

/// 菜单项文字
fn action_label(action: RowAction) -> &'static str {
    let texts = &t().actions;
    match action {
        RowAction::View => texts.view,
        RowAction::Verify => texts.verify,
        RowAction::Install => texts.install,
        RowAction::Delete => texts.delete,
    }
}

/// 渲染行操作菜单
fn render_action_menu(frame: &mut Frame, modal: &Modal) {
    let Modal::ActionMenu { record, selected } = modal else {
        return;
    };
    let c = colors();

    // 边框(2) + 域名(1) + 空行(1) + 菜单项
    let height = RowAction::ALL.len() as u16 + 4;
    let area = centered_rect(36, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t().modal.action_menu_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            format!(" {}", truncate_to_width(&record.domain, inner.width.saturating_sub(1) as usize)),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
    ];

    for (i, action) in RowAction::ALL.iter().enumerate() {
        let is_selected = i == *selected;
        let base = if action.is_danger() {
            Style::default().fg(c.error)
        } else {
            Style::default().fg(c.fg)
        };
        let style = if is_selected {
            base.bg(c.selected_bg).add_modifier(Modifier::BOLD)
        } else {
            base
        };
        let marker = if is_selected { "▶ " } else { "  " };
        lines.push(Line::styled(format!("{marker}{}", action_label(*action)), style));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete { domain, focus, .. } = modal else {
        return;
    };
    let texts = t();
    let c = colors();

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cancel_style = if *focus == 0 {
        Style::default().fg(c.bg).bg(c.fg)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!(" {}", texts.modal.confirm_delete.message),
            Style::default().fg(c.fg),
        ),
        Line::styled(
            format!(" \"{}\"", truncate_to_width(domain, inner.width.saturating_sub(3) as usize)),
            Style::default().fg(c.warning),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let c = colors();

    let area = centered_rect(56, 22, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(help.table_section),
        entry("↑↓ / jk", help.move_selection),
        entry("Enter", help.open_actions),
        entry("Alt+a", help.add_domain),
        entry("Alt+v", help.verify_selected),
        entry("Alt+d", help.delete_selected),
        entry("/", help.search),
        entry("Alt+s", help.toggle_sort),
        entry("Alt+r", help.refresh),
        entry("q", help.quit),
        Line::from(""),
        section(help.drawer_section),
        entry("Tab", texts.hints.actions.switch_button),
        entry("Enter", help.submit_form),
        entry("Esc", help.cancel_form),
        Line::from(""),
        Line::styled(format!("  {}", texts.modal.press_esc_to_close), Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
