//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! 只读访问 Model，把当前状态画到终端上。
//! 单屏布局，自上而下：
//!
//!     ┌──────────────────────────────────────────────────────┐
//!     │ 标题栏                                                │
//!     ├──────────────────────────────────────────────────────┤
//!     │ 工具栏：[搜索框]           [排序方向]  [Add Domain]    │
//!     ├──────────────────────────────────────────┬───────────┤
//!     │                                          │           │
//!     │ 域名表格                                 │  创建抽屉  │
//!     │                                          │ （可选）   │
//!     ├──────────────────────────────────────────┴───────────┤
//!     │ 状态栏：快捷键提示 │ 通知                             │
//!     └──────────────────────────────────────────────────────┘
//!
//!     弹窗（操作菜单、删除确认、帮助）最后绘制，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
