//! 页面状态模块
//!
//! 定义表格、抽屉、弹窗与通知的状态数据结构

mod domains;
mod drawer;
mod modal;
mod notification;

pub use domains::DomainsState;
pub use drawer::{DrawerField, DrawerState};
pub use modal::{Modal, ModalState};
pub use notification::{Notification, NotificationKind};
