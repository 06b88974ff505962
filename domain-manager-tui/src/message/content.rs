//! 表格消息
//!
//! 处理表格中的操作，如选择行、打开操作菜单、增删等

/// 表格消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开当前行的操作菜单
    OpenActions,

    // ========== 操作 ==========
    /// 打开创建抽屉
    Add,
    /// 验证当前选中项
    Verify,
    /// 删除当前选中项（需确认）
    Delete,

    // ========== 工具栏 ==========
    /// 切换排序方向
    ToggleSort,
    /// 聚焦搜索框
    FocusSearch,
}
