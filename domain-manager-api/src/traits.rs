use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DomainRecord, NewDomain, UpdateDomainRequest};

/// 域名集合远程 API Trait
///
/// 对应 REST 资源 `/domain` 的五个操作。
/// 实现者只负责传输，不负责缓存与失效（由上层数据层处理）。
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// `GET /domain`：获取完整域名列表
    async fn list_domains(&self) -> Result<Vec<DomainRecord>>;

    /// `GET /domain/{id}`：按 ID 获取单个域名
    async fn get_domain(&self, id: &str) -> Result<DomainRecord>;

    /// `POST /domain`：创建域名
    ///
    /// 未提供的 `createdDate` / `status` / `isActive` 在发送前补全默认值。
    async fn create_domain(&self, input: NewDomain) -> Result<DomainRecord>;

    /// `PUT /domain/{id}`：部分更新
    async fn update_domain(&self, id: &str, patch: &UpdateDomainRequest) -> Result<DomainRecord>;

    /// `DELETE /domain/{id}`：删除域名
    async fn delete_domain(&self, id: &str) -> Result<()>;
}
