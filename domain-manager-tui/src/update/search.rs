//! 搜索框更新逻辑

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索框消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => app.domains.push_search_char(c),
        SearchMessage::Backspace => app.domains.pop_search_char(),
        SearchMessage::Clear => app.domains.clear_search(),
        SearchMessage::Done => app.focus = FocusPanel::Table,
    }
}
