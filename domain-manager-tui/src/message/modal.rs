//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 上一个菜单项
    SelectPrevious,

    /// 下一个菜单项
    SelectNext,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 确认/提交
    Confirm,
}
