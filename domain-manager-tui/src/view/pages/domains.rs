//! 域名表格视图

use domain_manager_api::DomainRecord;
use domain_manager_core::utils::datetime::format_created_date;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染域名表格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.domains;

    if state.records.is_empty() {
        if state.loading {
            render_message(frame, area, t().common.loading, None);
        } else if let Some(ref error) = state.error {
            render_error(frame, area, error);
        } else {
            render_message(frame, area, t().domains.no_domains, Some(t().drawer.title));
        }
    } else if state.visible.is_empty() {
        render_message(frame, area, t().domains.no_match, None);
    } else {
        render_table(app, frame, area);
    }
}

/// 渲染提示文字（空状态、加载中）
fn render_message(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let mut content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(colors().fg)),
    ];

    if let Some(hint) = hint {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("Alt+a", Styles::hint_key()),
            Span::raw(" "),
            Span::styled(hint, Styles::muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染首次加载失败
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.domains.load_failed),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("  {error}"), Style::default().fg(c.error)),
        Line::from(""),
        Line::styled(format!("  {}", texts.domains.retry_hint), Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染表格
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let header = Row::new(vec![
        Cell::from(texts.domains.col_domain),
        Cell::from(texts.domains.col_active),
        Cell::from(texts.domains.col_status),
        Cell::from(texts.domains.col_created),
    ])
    .style(Styles::title())
    .bottom_margin(1);

    let rows: Vec<Row> = app.domains.visible.iter().map(domain_row).collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(16),
        Constraint::Length(22),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .style(Style::default().fg(c.fg))
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(app.domains.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// 单行：域名（带状态圆点）、启用状态、验证状态、创建时间
fn domain_row(record: &DomainRecord) -> Row<'static> {
    let texts = t();
    let c = colors();

    let dot_color = active_dot_color(record.is_active);

    let domain = Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::raw(record.domain.clone()),
    ]);

    let (active_text, active_style) = if record.is_active {
        (texts.domains.active, Style::default().fg(c.success))
    } else {
        (texts.domains.not_active, Styles::muted())
    };

    let (status_text, status_style) = if record.status.is_verified() {
        (texts.domains.verified, Style::default().fg(c.success))
    } else {
        (texts.domains.not_verified, Style::default().fg(c.warning))
    };

    Row::new(vec![
        Cell::from(domain),
        Cell::from(Span::styled(active_text, active_style)),
        Cell::from(Span::styled(status_text, status_style)),
        Cell::from(Span::styled(format_created_date(record.created_date), Styles::muted())),
    ])
}

/// 域名前圆点：启用为绿色，停用为红色
fn active_dot_color(is_active: bool) -> Color {
    let c = colors();
    if is_active {
        c.success
    } else {
        c.error
    }
}
