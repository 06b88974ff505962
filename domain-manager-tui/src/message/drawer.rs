//! 创建抽屉消息

/// 创建抽屉消息
#[derive(Debug, Clone)]
pub enum DrawerMessage {
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 在输入框与按钮之间切换焦点
    NextField,
    /// 提交或取消（取决于焦点）
    Confirm,
    /// 取消并关闭
    Cancel,
}
