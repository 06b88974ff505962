//! 核心服务
//!
//! 封装 domain-manager-core 的 [`DomainService`]，
//! 在 tokio 运行时上执行 [`Command`]，结果以 [`AppMessage`] 的形式送回主循环。

use std::sync::Arc;

use domain_manager_api::{DomainApi, NewDomain};
use domain_manager_core::DomainService;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::Command;
use crate::message::{AppMessage, BackendMessage};

/// TUI 核心服务
pub struct CoreService {
    domains: Arc<DomainService>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
    rx: UnboundedReceiver<AppMessage>,
}

impl CoreService {
    /// 创建核心服务实例，并立即订阅域名列表
    pub fn new(api: Arc<dyn DomainApi>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            domains: Arc::new(DomainService::new(api)),
            runtime,
            tx,
            rx,
        };
        service.forward_list_events();
        service
    }

    /// 将列表查询事件转发给主循环
    ///
    /// 订阅在此处同步建立，保证之后的任何拉取结果都不会丢失。
    fn forward_list_events(&self) {
        let mut subscription = self.domains.subscribe_domains();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            while let Some(event) = subscription.recv().await {
                if tx.send(AppMessage::Backend(BackendMessage::Query(event))).is_err() {
                    break;
                }
            }
        });
    }

    /// 异步执行命令
    pub fn execute(&self, command: Command) {
        log::debug!("Executing command: {command:?}");
        let service = self.domains.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            if let Some(msg) = run_command(&service, command).await {
                // 主循环已退出时忽略
                let _ = tx.send(AppMessage::Backend(msg));
            }
        });
    }

    /// 取出一条已完成的结果（非阻塞）
    pub fn try_recv(&mut self) -> Option<AppMessage> {
        self.rx.try_recv().ok()
    }
}

async fn run_command(service: &DomainService, command: Command) -> Option<BackendMessage> {
    match command {
        // 列表结果经由订阅事件送达
        Command::LoadDomains => {
            let _ = service.list_domains().await;
            None
        }
        Command::RefreshDomains => {
            let _ = service.refetch_domains().await;
            None
        }
        Command::CreateDomain { domain } => Some(BackendMessage::Created(
            service.create_domain(NewDomain::new(domain)).await,
        )),
        Command::VerifyDomain { id, domain, patch } => Some(BackendMessage::Verified {
            domain,
            result: service.update_domain(&id, &patch).await,
        }),
        Command::DeleteDomain { id, domain } => Some(BackendMessage::Deleted {
            domain,
            result: service.delete_domain(&id).await,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use domain_manager_api::{
        DomainRecord, DomainStatus, RemoteError, Result as ApiResult, UpdateDomainRequest,
    };
    use domain_manager_core::QueryEvent;
    use tokio::sync::Mutex;

    use super::*;

    /// 内存版远程集合
    #[derive(Default)]
    struct InMemoryApi {
        records: Mutex<Vec<DomainRecord>>,
    }

    #[async_trait]
    impl DomainApi for InMemoryApi {
        async fn list_domains(&self) -> ApiResult<Vec<DomainRecord>> {
            Ok(self.records.lock().await.clone())
        }

        async fn get_domain(&self, id: &str) -> ApiResult<DomainRecord> {
            self.records
                .lock()
                .await
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| RemoteError::http(404, r#""Not found""#))
        }

        async fn create_domain(&self, input: NewDomain) -> ApiResult<DomainRecord> {
            let mut records = self.records.lock().await;
            let payload = input.into_payload(1_700_000_000);
            let record = DomainRecord {
                id: (records.len() + 1).to_string(),
                domain: payload.domain,
                is_active: payload.is_active,
                status: payload.status,
                created_date: Some(payload.created_date),
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn update_domain(
            &self,
            id: &str,
            patch: &UpdateDomainRequest,
        ) -> ApiResult<DomainRecord> {
            let mut records = self.records.lock().await;
            let record = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| RemoteError::http(404, r#""Not found""#))?;
            if let Some(status) = patch.status {
                record.status = status;
            }
            Ok(record.clone())
        }

        async fn delete_domain(&self, id: &str) -> ApiResult<()> {
            let mut records = self.records.lock().await;
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(RemoteError::http(404, r#""Not found""#));
            }
            Ok(())
        }
    }

    /// 收集消息直到满足条件或超时
    async fn collect_until(
        service: &mut CoreService,
        done: impl Fn(&[AppMessage]) -> bool,
    ) -> Vec<AppMessage> {
        let mut received = Vec::new();
        for _ in 0..200 {
            while let Some(msg) = service.try_recv() {
                received.push(msg);
            }
            if done(&received) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        received
    }

    fn last_loaded(messages: &[AppMessage]) -> Option<Vec<DomainRecord>> {
        messages.iter().rev().find_map(|m| match m {
            AppMessage::Backend(BackendMessage::Query(QueryEvent::DomainsLoaded(records))) => {
                Some(records.clone())
            }
            _ => None,
        })
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn load_delivers_list_through_subscription() {
        let mut service = CoreService::new(Arc::new(InMemoryApi::default()), Handle::current());
        service.execute(Command::LoadDomains);

        let messages = collect_until(&mut service, |m| last_loaded(m).is_some()).await;
        assert_eq!(last_loaded(&messages), Some(Vec::new()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_reports_result_and_refetches() {
        let mut service = CoreService::new(Arc::new(InMemoryApi::default()), Handle::current());
        service.execute(Command::LoadDomains);
        collect_until(&mut service, |m| last_loaded(m).is_some()).await;

        service.execute(Command::CreateDomain {
            domain: "example.com".to_string(),
        });
        let messages = collect_until(&mut service, |m| {
            m.iter()
                .any(|m| matches!(m, AppMessage::Backend(BackendMessage::Created(_))))
                && last_loaded(m).is_some_and(|r| r.len() == 1)
        })
        .await;

        let created = messages.iter().find_map(|m| match m {
            AppMessage::Backend(BackendMessage::Created(Ok(record))) => Some(record.clone()),
            _ => None,
        });
        let created = created.unwrap();
        assert_eq!(created.domain, "example.com");
        assert_eq!(created.status, DomainStatus::Unverified);
        assert_eq!(last_loaded(&messages).unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_delete_reports_error() {
        let mut service = CoreService::new(Arc::new(InMemoryApi::default()), Handle::current());
        service.execute(Command::DeleteDomain {
            id: "missing".to_string(),
            domain: "gone.com".to_string(),
        });

        let messages = collect_until(&mut service, |m| {
            m.iter()
                .any(|m| matches!(m, AppMessage::Backend(BackendMessage::Deleted { .. })))
        })
        .await;

        let failed = messages.iter().any(|m| {
            matches!(
                m,
                AppMessage::Backend(BackendMessage::Deleted { result: Err(e), .. })
                    if e.as_remote().and_then(|r| r.status) == Some(404)
            )
        });
        assert!(failed);
    }
}
