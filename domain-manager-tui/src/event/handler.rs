//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, DrawerMessage, ModalMessage, SearchMessage};
use crate::model::{App, Modal};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 优先级：弹窗 > 抽屉 > 搜索框 > 表格
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.drawer.is_open() {
        return handle_drawer_keys(key);
    }

    if app.focus.is_search() {
        return handle_search_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }

    // Tab: 切换到搜索框
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    handle_table_keys(key)
}

/// 处理表格的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    // 操作快捷键
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_VERIFY.matches(&key) {
        return AppMessage::Content(ContentMessage::Verify);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::SORT.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSort);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::FocusSearch);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Enter: 打开操作菜单
        KeyCode::Enter => {
            AppMessage::Content(ContentMessage::OpenActions)
        }
        // Home: 跳到第一项
        KeyCode::Home => {
            AppMessage::Content(ContentMessage::SelectFirst)
        }
        // End: 跳到最后一项
        KeyCode::End => {
            AppMessage::Content(ContentMessage::SelectLast)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => AppMessage::Search(SearchMessage::Done),
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Char(c) if is_text_input(&key) => AppMessage::Search(SearchMessage::Input(c)),
        _ => AppMessage::Noop,
    }
}

/// 处理创建抽屉的按键
fn handle_drawer_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Drawer(DrawerMessage::NextField),

        // Enter: 提交或取消（取决于焦点）
        KeyCode::Enter => AppMessage::Drawer(DrawerMessage::Confirm),

        KeyCode::Esc => AppMessage::Drawer(DrawerMessage::Cancel),

        KeyCode::Backspace => AppMessage::Drawer(DrawerMessage::Backspace),

        KeyCode::Char(c) if is_text_input(&key) => AppMessage::Drawer(DrawerMessage::Input(c)),

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ActionMenu { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppMessage::Modal(ModalMessage::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => AppMessage::Modal(ModalMessage::SelectNext),
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::ConfirmDelete { .. } => match key.code {
            // ← → / Tab: 切换按钮
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 普通字符输入（允许 Shift）
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}
