//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **抽屉内容归 `drawer.*`**：创建表单
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **临时通知归 `notify.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 域名表格与工具栏
    pub domains: DomainsTexts,
    /// 行操作菜单项
    pub actions: RowActionTexts,
    /// 创建抽屉
    pub drawer: DrawerTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 通知文本
    pub notify: NotifyTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub clear: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub delete: &'static str,
    pub loading: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: HintActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str,
    pub arrows_lr: &'static str,
}

/// 按键对应的动作
pub struct HintActionTexts {
    pub select: &'static str,
    pub actions: &'static str,
    pub add: &'static str,
    pub search: &'static str,
    pub sort: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub submit: &'static str,
    pub switch_button: &'static str,
    pub done: &'static str,
}

// ============================================================================
// 域名表格
// ============================================================================

/// 域名表格与工具栏文本
pub struct DomainsTexts {
    pub title: &'static str,
    pub add_domain: &'static str,
    // 工具栏
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub order_asc: &'static str,
    pub order_desc: &'static str,
    // 列标题
    pub col_domain: &'static str,
    pub col_active: &'static str,
    pub col_status: &'static str,
    pub col_created: &'static str,
    // 单元格
    pub active: &'static str,
    pub not_active: &'static str,
    pub verified: &'static str,
    pub not_verified: &'static str,
    // 状态
    pub no_domains: &'static str,
    pub no_match: &'static str,
    pub refreshing: &'static str,
    pub load_failed: &'static str,
    pub retry_hint: &'static str,
}

// ============================================================================
// 行操作
// ============================================================================

/// 行操作菜单项
pub struct RowActionTexts {
    pub view: &'static str,
    pub verify: &'static str,
    pub install: &'static str,
    pub delete: &'static str,
}

// ============================================================================
// 创建抽屉
// ============================================================================

/// 创建抽屉文本
pub struct DrawerTexts {
    pub title: &'static str,
    pub domain_label: &'static str,
    pub domain_placeholder: &'static str,
    pub domain_required: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub confirm_delete: ConfirmDeleteTexts,
    pub action_menu_title: &'static str,
    pub press_esc_to_close: &'static str,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

// ============================================================================
// 通知
// ============================================================================

/// 临时通知文本
pub struct NotifyTexts {
    pub created: &'static str,
    pub create_failed: &'static str,
    pub verified: &'static str,
    pub verify_failed: &'static str,
    pub already_verified: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub load_failed: &'static str,
    pub refreshing: &'static str,
    pub view_unavailable: &'static str,
    pub install_unavailable: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub table_section: &'static str,
    pub drawer_section: &'static str,
    pub move_selection: &'static str,
    pub open_actions: &'static str,
    pub add_domain: &'static str,
    pub verify_selected: &'static str,
    pub delete_selected: &'static str,
    pub search: &'static str,
    pub toggle_sort: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
    pub submit_form: &'static str,
    pub cancel_form: &'static str,
}
