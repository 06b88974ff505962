//! 查询缓存
//!
//! 每个读取操作的结果按 [`QueryKey`] 缓存，键本身决定它提供哪些 [`CacheTag`]，
//! 因此条目在首次拉取成功之前（订阅后、拉取中或拉取失败）也能被失效。
//! 写操作成功后按标签失效：仍有订阅者的条目标记为过期并交给调用方重新拉取，
//! 无订阅者的条目直接淘汰。

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use domain_manager_api::DomainRecord;

/// 无订阅者的条目保留时长
pub const DEFAULT_KEEP_UNUSED: Duration = Duration::from_secs(60);

/// 缓存键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// 完整域名列表
    DomainList,
    /// 单条域名
    Domain(String),
}

impl QueryKey {
    /// 该查询提供的标签
    ///
    /// 单条查询不声明标签，写操作后不会被重新拉取。
    pub fn provides(&self) -> &'static [CacheTag] {
        match self {
            Self::DomainList => &[CacheTag::Domain],
            Self::Domain(_) => &[],
        }
    }
}

/// 失效标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    Domain,
}

/// 缓存值
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    DomainList(Vec<DomainRecord>),
    Domain(DomainRecord),
}

#[derive(Debug)]
struct CacheEntry {
    value: Option<CachedValue>,
    provides: &'static [CacheTag],
    stale: bool,
    subscribers: usize,
    stored_at: Instant,
}

impl CacheEntry {
    fn empty(key: &QueryKey) -> Self {
        Self {
            value: None,
            provides: key.provides(),
            stale: true,
            subscribers: 0,
            stored_at: Instant::now(),
        }
    }
}

/// 按键缓存、按标签失效的查询缓存
#[derive(Debug)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
    keep_unused: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_keep_unused(DEFAULT_KEEP_UNUSED)
    }

    /// 指定无订阅者条目的保留时长
    #[must_use]
    pub fn with_keep_unused(keep_unused: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            keep_unused,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryKey, CacheEntry>> {
        // 临界区内没有会 panic 的逻辑，中毒时继续使用内部数据
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 返回未过期的缓存值，顺带淘汰已超时的无订阅条目
    pub fn fresh(&self, key: &QueryKey) -> Option<CachedValue> {
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if self.is_expired(entry) {
            entries.remove(key);
            return None;
        }
        if entry.stale {
            return None;
        }
        entry.value.clone()
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        entry.subscribers == 0 && entry.stored_at.elapsed() > self.keep_unused
    }

    /// 返回缓存值（不论是否过期）
    pub fn peek(&self, key: &QueryKey) -> Option<CachedValue> {
        self.lock().get(key).and_then(|e| e.value.clone())
    }

    /// 写入查询结果，保留已有订阅计数
    ///
    /// 写入前清理所有已超时的无订阅条目。
    pub fn store(&self, key: QueryKey, value: CachedValue) {
        let mut entries = self.lock();
        entries.retain(|k, e| *k == key || !self.is_expired(e));
        let entry = entries
            .entry(key)
            .or_insert_with_key(CacheEntry::empty);
        entry.value = Some(value);
        entry.stale = false;
        entry.stored_at = Instant::now();
    }

    /// 增加订阅者
    pub fn subscribe(&self, key: QueryKey) {
        let mut entries = self.lock();
        entries
            .entry(key)
            .or_insert_with_key(CacheEntry::empty)
            .subscribers += 1;
    }

    /// 减少订阅者
    pub fn unsubscribe(&self, key: &QueryKey) {
        let mut entries = self.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        entry.subscribers = entry.subscribers.saturating_sub(1);
        if entry.subscribers > 0 {
            return;
        }
        // 计时从最后一个订阅者离开时开始
        entry.stored_at = Instant::now();
        let empty = entry.value.is_none();
        if empty {
            entries.remove(key);
        }
    }

    pub fn subscriber_count(&self, key: &QueryKey) -> usize {
        self.lock().get(key).map_or(0, |e| e.subscribers)
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 按标签失效
    ///
    /// 返回需要重新拉取的键（仍有订阅者的条目）。
    pub fn invalidate(&self, tags: &[CacheTag]) -> Vec<QueryKey> {
        let mut entries = self.lock();
        let mut refetch = Vec::new();

        entries.retain(|key, entry| {
            if !entry.provides.iter().any(|t| tags.contains(t)) {
                return true;
            }
            if entry.subscribers > 0 {
                entry.stale = true;
                refetch.push(key.clone());
                true
            } else {
                false
            }
        });

        log::debug!("Invalidated {tags:?}, {} key(s) to refetch", refetch.len());
        refetch
    }
}

/// 订阅守卫，drop 时自动退订
#[derive(Debug)]
pub struct QuerySubscription {
    cache: Arc<QueryCache>,
    key: QueryKey,
}

impl QuerySubscription {
    pub fn new(cache: Arc<QueryCache>, key: QueryKey) -> Self {
        cache.subscribe(key.clone());
        Self { cache, key }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

impl Drop for QuerySubscription {
    fn drop(&mut self) {
        self.cache.unsubscribe(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    fn list(ids: &[&str]) -> CachedValue {
        CachedValue::DomainList(ids.iter().map(|id| record(id, "a.com", 1)).collect())
    }

    #[test]
    fn store_then_fresh() {
        let cache = QueryCache::new();
        assert!(cache.fresh(&QueryKey::DomainList).is_none());

        cache.store(QueryKey::DomainList, list(&["1"]));
        assert_eq!(cache.fresh(&QueryKey::DomainList), Some(list(&["1"])));
    }

    #[test]
    fn invalidate_subscribed_marks_stale() {
        let cache = Arc::new(QueryCache::new());
        let _sub = QuerySubscription::new(cache.clone(), QueryKey::DomainList);
        cache.store(QueryKey::DomainList, list(&["1"]));

        let keys = cache.invalidate(&[CacheTag::Domain]);
        assert_eq!(keys, vec![QueryKey::DomainList]);
        assert!(cache.fresh(&QueryKey::DomainList).is_none());
        // 过期数据仍可用于展示
        assert_eq!(cache.peek(&QueryKey::DomainList), Some(list(&["1"])));
    }

    #[test]
    fn invalidate_unsubscribed_evicts() {
        let cache = QueryCache::new();
        cache.store(QueryKey::DomainList, list(&["1"]));

        assert!(cache.invalidate(&[CacheTag::Domain]).is_empty());
        assert!(cache.peek(&QueryKey::DomainList).is_none());
    }

    #[test]
    fn untagged_entries_survive_invalidation() {
        let cache = QueryCache::new();
        let key = QueryKey::Domain("7".to_string());
        cache.store(key.clone(), CachedValue::Domain(record("7", "b.com", 1)));

        cache.invalidate(&[CacheTag::Domain]);
        assert!(cache.fresh(&key).is_some());
    }

    #[test]
    fn subscribed_list_invalidated_before_first_value() {
        let cache = Arc::new(QueryCache::new());
        let _sub = QuerySubscription::new(cache.clone(), QueryKey::DomainList);

        // 尚未有任何拉取成功
        assert_eq!(cache.invalidate(&[CacheTag::Domain]), vec![QueryKey::DomainList]);
        assert_eq!(cache.subscriber_count(&QueryKey::DomainList), 1);
    }

    #[test]
    fn expired_entries_are_removed() {
        let cache = QueryCache::with_keep_unused(Duration::ZERO);
        let first = QueryKey::Domain("1".to_string());
        cache.store(first.clone(), CachedValue::Domain(record("1", "a.com", 1)));
        std::thread::sleep(Duration::from_millis(5));

        cache.store(
            QueryKey::Domain("2".to_string()),
            CachedValue::Domain(record("2", "b.com", 1)),
        );
        assert!(cache.peek(&first).is_none());
        assert_eq!(cache.len(), 1);

        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.fresh(&QueryKey::Domain("2".to_string())).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn subscription_guard_counts() {
        let cache = Arc::new(QueryCache::new());
        {
            let _a = QuerySubscription::new(cache.clone(), QueryKey::DomainList);
            let _b = QuerySubscription::new(cache.clone(), QueryKey::DomainList);
            assert_eq!(cache.subscriber_count(&QueryKey::DomainList), 2);
        }
        assert_eq!(cache.subscriber_count(&QueryKey::DomainList), 0);
    }

    #[test]
    fn unused_entries_expire() {
        let cache = QueryCache::with_keep_unused(Duration::ZERO);
        cache.store(QueryKey::DomainList, list(&["1"]));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.fresh(&QueryKey::DomainList).is_none());
    }

    #[test]
    fn subscribed_entries_do_not_expire() {
        let cache = Arc::new(QueryCache::with_keep_unused(Duration::ZERO));
        let _sub = QuerySubscription::new(cache.clone(), QueryKey::DomainList);
        cache.store(QueryKey::DomainList, list(&["1"]));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.fresh(&QueryKey::DomainList).is_some());
    }
}
