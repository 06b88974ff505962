//! 后端结果消息

use domain_manager_api::DomainRecord;
use domain_manager_core::{CoreError, QueryEvent};

/// 后端任务完成后送回主循环的消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表查询状态变化（来自订阅）
    Query(QueryEvent),
    /// 创建结果
    Created(Result<DomainRecord, CoreError>),
    /// 验证结果
    Verified {
        domain: String,
        result: Result<DomainRecord, CoreError>,
    },
    /// 删除结果
    Deleted {
        domain: String,
        result: Result<(), CoreError>,
    },
}
