//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 域名表格
    #[default]
    Table,
    /// 工具栏搜索框
    Search,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Table => FocusPanel::Search,
            FocusPanel::Search => FocusPanel::Table,
        }
    }

    /// 是否是搜索框
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
