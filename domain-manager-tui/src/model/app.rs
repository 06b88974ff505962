//! 应用主状态结构

use std::time::Instant;

use super::{
    DomainsState, DrawerState, FocusPanel, ModalState, Notification, NotificationKind,
};
use crate::backend::Command;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusPanel,

    /// 域名表格状态
    pub domains: DomainsState,

    /// 创建抽屉状态
    pub drawer: DrawerState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏通知
    pub notification: Option<Notification>,

    /// 待执行的后端命令（由主循环取出）
    pub commands: Vec<Command>,
}

impl App {
    /// 创建新的应用实例，并排入首次加载
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Table,
            domains: DomainsState::new(),
            drawer: DrawerState::new(),
            modal: ModalState::new(),
            notification: None,
            commands: vec![Command::LoadDomains],
        }
    }

    /// 排入后端命令
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// 取出全部待执行命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// 显示通知（替换当前通知）
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification::new(kind, message);
        log::debug!("Notify {kind:?}: {}", notification.message);
        self.notification = Some(notification);
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Info, message);
    }

    /// 清除已过期的通知
    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
