//! 域名管理服务
//!
//! 读操作走 [`QueryCache`]，写操作成功后按 [`CacheTag::Domain`] 失效，
//! 并重新拉取仍有订阅者的查询，结果通过广播通道推送给订阅者。

use std::sync::Arc;

use domain_manager_api::{DomainApi, DomainRecord, NewDomain, RemoteError, UpdateDomainRequest};
use futures::future::join_all;
use tokio::sync::broadcast;

use crate::cache::{CacheTag, CachedValue, QueryCache, QueryKey, QuerySubscription};
use crate::error::{CoreError, CoreResult};
use crate::form::validate_domain_input;

/// 广播通道容量
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// 列表查询的状态变化
#[derive(Debug, Clone, PartialEq)]
pub enum QueryEvent {
    /// 开始（重新）拉取
    DomainsFetching,
    /// 拉取成功
    DomainsLoaded(Vec<DomainRecord>),
    /// 拉取失败
    DomainsFailed(RemoteError),
}

/// 列表订阅
///
/// 持有期间列表查询视为“被使用”，写操作后会自动重新拉取。
pub struct DomainListSubscription {
    receiver: broadcast::Receiver<QueryEvent>,
    _guard: QuerySubscription,
}

impl DomainListSubscription {
    /// 等待下一个事件，发送端全部关闭时返回 `None`
    pub async fn recv(&mut self) -> Option<QueryEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Domain list subscriber lagged, skipped {skipped} event(s)");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// 非阻塞地取出一个事件
    pub fn try_recv(&mut self) -> Option<QueryEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    log::warn!("Domain list subscriber lagged, skipped {skipped} event(s)");
                }
                Err(_) => return None,
            }
        }
    }
}

/// 域名管理服务
pub struct DomainService {
    api: Arc<dyn DomainApi>,
    cache: Arc<QueryCache>,
    events: broadcast::Sender<QueryEvent>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(api: Arc<dyn DomainApi>) -> Self {
        Self::with_cache(api, Arc::new(QueryCache::new()))
    }

    #[must_use]
    pub fn with_cache(api: Arc<dyn DomainApi>, cache: Arc<QueryCache>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { api, cache, events }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// 订阅域名列表
    pub fn subscribe_domains(&self) -> DomainListSubscription {
        DomainListSubscription {
            receiver: self.events.subscribe(),
            _guard: QuerySubscription::new(self.cache.clone(), QueryKey::DomainList),
        }
    }

    /// 获取域名列表（优先使用缓存）
    pub async fn list_domains(&self) -> CoreResult<Vec<DomainRecord>> {
        if let Some(CachedValue::DomainList(records)) = self.cache.fresh(&QueryKey::DomainList) {
            log::debug!("Domain list served from cache ({} records)", records.len());
            self.publish(QueryEvent::DomainsLoaded(records.clone()));
            return Ok(records);
        }
        self.fetch_domains().await
    }

    /// 忽略缓存，强制重新拉取域名列表
    pub async fn refetch_domains(&self) -> CoreResult<Vec<DomainRecord>> {
        self.fetch_domains().await
    }

    /// 获取单个域名
    pub async fn get_domain(&self, id: &str) -> CoreResult<DomainRecord> {
        let key = QueryKey::Domain(id.to_string());
        if let Some(CachedValue::Domain(record)) = self.cache.fresh(&key) {
            return Ok(record);
        }

        let record = self
            .api
            .get_domain(id)
            .await
            .inspect_err(|e| Self::log_failure("get domain", e))?;
        self.cache.store(key, CachedValue::Domain(record.clone()));
        Ok(record)
    }

    /// 创建域名
    pub async fn create_domain(&self, mut input: NewDomain) -> CoreResult<DomainRecord> {
        input.domain = validate_domain_input(&input.domain)?.domain;

        let created = self
            .api
            .create_domain(input)
            .await
            .inspect_err(|e| Self::log_failure("create domain", e))?;
        log::info!("Created domain {} ({})", created.domain, created.id);

        self.invalidate(&[CacheTag::Domain]).await;
        Ok(created)
    }

    /// 更新域名
    pub async fn update_domain(
        &self,
        id: &str,
        patch: &UpdateDomainRequest,
    ) -> CoreResult<DomainRecord> {
        let updated = self
            .api
            .update_domain(id, patch)
            .await
            .inspect_err(|e| Self::log_failure("update domain", e))?;
        log::info!("Updated domain {id}");

        self.invalidate(&[CacheTag::Domain]).await;
        Ok(updated)
    }

    /// 删除域名
    pub async fn delete_domain(&self, id: &str) -> CoreResult<()> {
        self.api
            .delete_domain(id)
            .await
            .inspect_err(|e| Self::log_failure("delete domain", e))?;
        log::info!("Deleted domain {id}");

        self.invalidate(&[CacheTag::Domain]).await;
        Ok(())
    }

    async fn fetch_domains(&self) -> CoreResult<Vec<DomainRecord>> {
        self.publish(QueryEvent::DomainsFetching);

        match self.api.list_domains().await {
            Ok(records) => {
                log::debug!("Fetched {} domain(s)", records.len());
                self.cache
                    .store(QueryKey::DomainList, CachedValue::DomainList(records.clone()));
                self.publish(QueryEvent::DomainsLoaded(records.clone()));
                Ok(records)
            }
            Err(e) => {
                Self::log_failure("list domains", &e);
                self.publish(QueryEvent::DomainsFailed(e.clone()));
                Err(CoreError::Remote(e))
            }
        }
    }

    /// 失效并重新拉取仍被订阅的查询
    ///
    /// 重新拉取失败只通过事件通知，不影响写操作本身的结果。
    async fn invalidate(&self, tags: &[CacheTag]) {
        let keys = self.cache.invalidate(tags);
        let refetches = keys.into_iter().map(|key| async move {
            match key {
                QueryKey::DomainList => {
                    let _ = self.fetch_domains().await;
                }
                QueryKey::Domain(id) => {
                    let _ = self.get_domain(&id).await;
                }
            }
        });
        join_all(refetches).await;
    }

    fn publish(&self, event: QueryEvent) {
        // 没有订阅者时发送失败，忽略即可
        let _ = self.events.send(event);
    }

    fn log_failure(op: &str, e: &RemoteError) {
        if e.is_expected() {
            log::warn!("Failed to {op}: {e}");
        } else {
            log::error!("Failed to {op}: {e}");
        }
    }
}
