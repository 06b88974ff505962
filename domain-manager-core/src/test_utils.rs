//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use domain_manager_api::{
    DomainApi, DomainRecord, DomainStatus, NewDomain, RemoteError, Result, UpdateDomainRequest,
};
use tokio::sync::RwLock;

use crate::services::DomainService;

/// 构造测试记录
pub fn record(id: &str, domain: &str, created: i64) -> DomainRecord {
    DomainRecord {
        id: id.to_string(),
        domain: domain.to_string(),
        is_active: true,
        status: DomainStatus::Unverified,
        created_date: Some(created),
    }
}

// ===== MockDomainApi =====

/// 内存版远程集合
pub struct MockDomainApi {
    records: RwLock<Vec<DomainRecord>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    /// 如果 Some，所有调用返回此错误
    failure: RwLock<Option<RemoteError>>,
}

impl MockDomainApi {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<DomainRecord>) -> Self {
        let next_id = records.len() + 1;
        Self {
            records: RwLock::new(records),
            next_id: AtomicUsize::new(next_id),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            failure: RwLock::new(None),
        }
    }

    pub async fn set_failure(&self, err: Option<RemoteError>) {
        *self.failure.write().await = err;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<DomainRecord> {
        self.records.read().await.clone()
    }

    async fn check_failure(&self) -> Result<()> {
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> RemoteError {
        RemoteError::http(404, r#""Not found""#)
    }
}

#[async_trait]
impl DomainApi for MockDomainApi {
    async fn list_domains(&self) -> Result<Vec<DomainRecord>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self.records.read().await.clone())
    }

    async fn get_domain(&self, id: &str) -> Result<DomainRecord> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_domain(&self, input: NewDomain) -> Result<DomainRecord> {
        self.check_failure().await?;
        let payload = input.into_payload(1_700_000_000);
        let created = DomainRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst).to_string(),
            domain: payload.domain,
            is_active: payload.is_active,
            status: payload.status,
            created_date: Some(payload.created_date),
        };
        self.records.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_domain(&self, id: &str, patch: &UpdateDomainRequest) -> Result<DomainRecord> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let target = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(domain) = &patch.domain {
            target.domain = domain.clone();
        }
        if let Some(is_active) = patch.is_active {
            target.is_active = is_active;
        }
        if let Some(status) = patch.status {
            target.status = status;
        }
        if let Some(created) = patch.created_date {
            target.created_date = Some(created);
        }
        Ok(target.clone())
    }

    async fn delete_domain(&self, id: &str) -> Result<()> {
        self.check_failure().await?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

/// 创建带 mock 远程的服务
pub fn create_test_service(records: Vec<DomainRecord>) -> (Arc<MockDomainApi>, DomainService) {
    let api = Arc::new(MockDomainApi::with_records(records));
    let service = DomainService::new(api.clone());
    (api, service)
}
