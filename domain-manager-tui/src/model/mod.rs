//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Table / Search）
//!
//!         pub mod state;      // 表格、抽屉、弹窗、通知
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                      // 退出标志
//!             pub focus: FocusPanel,                      // 当前焦点
//!             pub domains: DomainsState,                  // 域名表格
//!             pub drawer: DrawerState,                    // 创建抽屉
//!             pub modal: ModalState,                      // 弹窗
//!             pub notification: Option<Notification>,     // 状态栏通知
//!             pub commands: Vec<Command>,                 // 待执行的后端命令
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改
//!         - 在 view/layout.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、域名表格状态（DomainsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     records 是最近一次拉取的完整列表，visible 是按 query（搜索文本 + 排序方向）
//!     推导出的显示列表。records 或 query 变化时 visible 立即重新计算。
//!
//!     loading 只在首次加载（尚无数据）时为 true，之后的刷新用 fetching 表示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗与抽屉
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal 枚举：
//!         - ActionMenu { record, selected }       行操作菜单
//!         - ConfirmDelete { id, domain, focus }   删除确认
//!         - Help                                  帮助
//!
//!     DrawerState：
//!         - domain 输入、校验错误、submitting（请求进行中）
//!         - 弹窗的优先级高于抽屉：两者同时打开时按键先交给弹窗
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、通知（Notification）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     写操作的结果以通知的形式显示在状态栏，3 秒后在主循环的 Tick 中过期。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    DomainsState, DrawerField, DrawerState, Modal, ModalState, Notification, NotificationKind,
};
