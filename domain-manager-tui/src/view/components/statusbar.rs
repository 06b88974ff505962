//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal, NotificationKind};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有通知，显示在右侧
    if let Some(ref notification) = app.notification {
        let c = colors();
        let color = match notification.kind {
            NotificationKind::Success => c.success,
            NotificationKind::Error => c.error,
            NotificationKind::Info => Color::Yellow,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            notification.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    match app.modal.active {
        Some(Modal::ActionMenu { .. }) => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push((keys.enter, texts.common.confirm));
            hints.push((keys.esc, texts.common.close));
            return hints;
        }
        Some(Modal::ConfirmDelete { .. }) => {
            hints.push((keys.arrows_lr, actions.switch_button));
            hints.push((keys.enter, texts.common.confirm));
            hints.push((keys.esc, texts.common.cancel));
            return hints;
        }
        Some(Modal::Help) => {
            hints.push((keys.esc, texts.common.close));
            return hints;
        }
        None => {}
    }

    if app.drawer.is_open() {
        hints.push((keys.tab, actions.switch_button));
        hints.push((keys.enter, actions.submit));
        hints.push((keys.esc, texts.common.cancel));
    } else if app.focus.is_search() {
        hints.push((keys.enter, actions.done));
        hints.push(("Ctrl+u", texts.common.clear));
    } else {
        hints.push((keys.arrows_ud, actions.select));
        hints.push((keys.enter, actions.actions));
        hints.push(("Alt+a", actions.add));
        hints.push(("/", actions.search));
        hints.push(("Alt+s", actions.sort));
        hints.push(("Alt+r", actions.refresh));
        hints.push(("?", actions.help));
        hints.push(("q", texts.common.quit));
    }

    hints
}
