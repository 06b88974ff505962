//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 抽屉宽度（列）
const DRAWER_WIDTH: u16 = 44;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 工具栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 工具栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let toolbar_area = main_layout[1];
    let content_area = main_layout[2];
    let status_area = main_layout[3];

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染工具栏
    components::toolbar::render(app, frame, toolbar_area);

    // 抽屉打开时，右侧让出一栏
    if app.drawer.is_open() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(DRAWER_WIDTH)])
            .split(content_area);

        render_table_panel(app, frame, columns[0]);
        components::drawer::render(app, frame, columns[1]);
    } else {
        render_table_panel(app, frame, content_area);
    }

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染表格面板（带边框与标题）
fn render_table_panel(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 表格持有焦点时高亮边框
    let is_focused = !app.focus.is_search() && !app.drawer.is_open();
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let title = if app.domains.fetching && !app.domains.loading {
        format!(" {} · {} ", texts.domains.title, texts.domains.refreshing)
    } else {
        format!(" {} ", texts.domains.title)
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::domains::render(app, frame, inner_area);
}
