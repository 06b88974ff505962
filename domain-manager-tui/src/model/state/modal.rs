//! 弹窗/对话框状态

use domain_manager_api::DomainRecord;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 行操作菜单
    ActionMenu {
        /// 目标记录
        record: DomainRecord,
        /// 选中的菜单项（`RowAction::ALL` 的索引）
        selected: usize,
    },
    /// 确认删除
    ConfirmDelete {
        /// 记录 ID
        id: String,
        /// 域名（显示用）
        domain: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示行操作菜单
    pub fn show_action_menu(&mut self, record: DomainRecord) {
        self.active = Some(Modal::ActionMenu {
            record,
            selected: 0,
        });
    }

    /// 显示确认删除弹窗（默认焦点在“取消”）
    pub fn show_confirm_delete(&mut self, id: &str, domain: &str) {
        self.active = Some(Modal::ConfirmDelete {
            id: id.to_string(),
            domain: domain.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
