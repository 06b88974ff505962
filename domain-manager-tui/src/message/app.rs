//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, DrawerMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（表格 ↔ 搜索框）
    ToggleFocus,

    /// 表格相关消息
    Content(ContentMessage),

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 创建抽屉相关消息
    Drawer(DrawerMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后端返回的结果
    Backend(BackendMessage),

    /// 返回 / 取消
    GoBack,

    /// 重新拉取域名列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 主循环节拍（用于让通知过期）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
