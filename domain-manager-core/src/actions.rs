//! 行操作分发

use domain_manager_api::{DomainRecord, DomainStatus, UpdateDomainRequest};
use serde::{Deserialize, Serialize};

/// 表格行上的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Verify,
    Install,
    Delete,
}

impl RowAction {
    /// 菜单中的显示顺序
    pub const ALL: [RowAction; 4] = [Self::View, Self::Verify, Self::Install, Self::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Verify => "verify",
            Self::Install => "install",
            Self::Delete => "delete",
        }
    }

    /// 危险操作（菜单中高亮）
    pub fn is_danger(self) -> bool {
        matches!(self, Self::Delete)
    }
}

/// 分发结果，由调用方执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEffect {
    /// 无远程副作用
    None,
    /// 发送更新请求
    Update {
        id: String,
        patch: UpdateDomainRequest,
    },
    /// 弹出删除确认，确认后再删除
    ConfirmDelete { id: String, domain: String },
}

/// 将行操作映射为副作用
pub fn dispatch(action: RowAction, record: &DomainRecord) -> RowEffect {
    match action {
        RowAction::View | RowAction::Install => {
            log::debug!("{} requested for {} ({})", action.as_str(), record.domain, record.id);
            RowEffect::None
        }
        RowAction::Verify => RowEffect::Update {
            id: record.id.clone(),
            patch: verify_patch(record),
        },
        RowAction::Delete => RowEffect::ConfirmDelete {
            id: record.id.clone(),
            domain: record.domain.clone(),
        },
    }
}

/// 验证请求体
///
/// 带上当前的 `domain` 与 `isActive`，远端按整体替换处理 PUT 时也不会丢字段。
pub fn verify_patch(record: &DomainRecord) -> UpdateDomainRequest {
    UpdateDomainRequest {
        domain: Some(record.domain.clone()),
        is_active: Some(record.is_active),
        status: Some(DomainStatus::Verified),
        created_date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn verify_sends_status_verified() {
        let mut r = record("9", "x.com", 1);
        r.is_active = false;

        match dispatch(RowAction::Verify, &r) {
            RowEffect::Update { id, patch } => {
                assert_eq!(id, "9");
                assert_eq!(patch.status, Some(DomainStatus::Verified));
                assert_eq!(patch.domain.as_deref(), Some("x.com"));
                assert_eq!(patch.is_active, Some(false));
                assert!(patch.created_date.is_none());
            }
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let r = record("3", "gone.com", 1);
        assert_eq!(
            dispatch(RowAction::Delete, &r),
            RowEffect::ConfirmDelete {
                id: "3".to_string(),
                domain: "gone.com".to_string(),
            }
        );
    }

    #[test]
    fn view_and_install_have_no_effect() {
        let r = record("1", "a.com", 1);
        assert_eq!(dispatch(RowAction::View, &r), RowEffect::None);
        assert_eq!(dispatch(RowAction::Install, &r), RowEffect::None);
    }

    #[test]
    fn only_delete_is_danger() {
        let danger: Vec<_> = RowAction::ALL.iter().filter(|a| a.is_danger()).collect();
        assert_eq!(danger, [&RowAction::Delete]);
    }
}
