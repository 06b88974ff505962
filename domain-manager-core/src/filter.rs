//! 列表过滤与排序

use domain_manager_api::DomainRecord;
use serde::{Deserialize, Serialize};

/// 按 `createdDate` 排序的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// 列表查看条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub sort_order: SortOrder,
}

impl ListQuery {
    /// 过滤并排序，不修改输入
    ///
    /// - 域名包含搜索文本（不区分大小写）；空搜索匹配全部
    /// - 按 `createdDate` 稳定排序，缺失值视为 0
    pub fn apply(&self, records: &[DomainRecord]) -> Vec<DomainRecord> {
        let needle = self.search_text.to_lowercase();
        let mut visible: Vec<DomainRecord> = records
            .iter()
            .filter(|r| needle.is_empty() || r.domain.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match self.sort_order {
            SortOrder::Asc => visible.sort_by_key(DomainRecord::created_or_zero),
            SortOrder::Desc => {
                visible.sort_by(|a, b| b.created_or_zero().cmp(&a.created_or_zero()));
            }
        }
        visible
    }
}
