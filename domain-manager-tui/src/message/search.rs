//! 搜索框消息

/// 搜索框消息
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 清空搜索文本
    Clear,
    /// 结束输入，焦点回到表格
    Done,
}
