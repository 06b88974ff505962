//! 临时通知

use std::time::{Duration, Instant};

/// 通知显示时长
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// 状态栏上的临时通知
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// 在 `now` 时刻是否已过期
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}
