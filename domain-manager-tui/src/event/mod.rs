//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         · handle_event    将事件翻译为 AppMessage，只读访问 App
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键分发优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     弹窗  ──▶  抽屉  ──▶  搜索框  ──▶  全局快捷键 / 表格
//!
//!     抽屉与搜索框打开时，普通字符全部视为文本输入，
//!     因此 q、/ 等单键快捷键只在表格焦点下生效。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 默认快捷键（keymap.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     q / Alt+q       退出                Ctrl+c      强制退出
//!     ? / Alt+h       帮助                Alt+r       刷新列表
//!     Esc             返回                Tab         切换搜索框
//!     ↑↓ / j k        移动选中            Enter       行操作菜单
//!     Alt+a           添加域名            Alt+v       验证域名
//!     Alt+d           删除域名            Alt+s       切换排序
//!     /               搜索                Ctrl+u      清空搜索
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
