//! 后端命令
//!
//! Update 层只负责把命令排入 `App::commands`，
//! 主循环取出后交给 [`CoreService`](super::CoreService) 在 tokio 运行时上执行。

use domain_manager_api::UpdateDomainRequest;

/// 需要访问远程 API 的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载域名列表（命中缓存则直接返回）
    LoadDomains,
    /// 强制重新拉取域名列表
    RefreshDomains,
    /// 创建域名（已校验并去除首尾空白）
    CreateDomain { domain: String },
    /// 验证域名
    VerifyDomain {
        id: String,
        domain: String,
        patch: UpdateDomainRequest,
    },
    /// 删除域名（已确认）
    DeleteDomain { id: String, domain: String },
}
