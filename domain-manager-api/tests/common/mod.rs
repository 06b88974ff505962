//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use domain_manager_api::{DomainApi, DomainRecord, HttpDomainApi, NewDomain};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试记录使用的域名前缀，便于清理
pub const TEST_DOMAIN_PREFIX: &str = "it-test-";

/// 生成唯一的测试域名
pub fn generate_test_domain() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{TEST_DOMAIN_PREFIX}{nanos:x}.example.com")
}

/// 测试上下文 - 封装指向真实 API 的客户端
pub struct TestContext {
    pub api: HttpDomainApi,
}

impl TestContext {
    /// 从 `DOMAIN_MANAGER_API_URL` 创建测试上下文
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("DOMAIN_MANAGER_API_URL").ok()?;
        let api = HttpDomainApi::new(base_url).ok()?;
        Some(Self { api })
    }

    /// 创建测试域名并返回创建的记录
    pub async fn create_test_domain(&self) -> Option<DomainRecord> {
        self.api
            .create_domain(NewDomain::new(generate_test_domain()))
            .await
            .ok()
    }

    /// 清理所有测试域名
    pub async fn cleanup_all_test_domains(&self) {
        if let Ok(domains) = self.api.list_domains().await {
            for record in domains {
                if record.domain.starts_with(TEST_DOMAIN_PREFIX) {
                    let _ = self.api.delete_domain(&record.id).await;
                }
            }
        }
    }
}
