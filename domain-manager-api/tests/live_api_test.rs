//! 真实 API 集成测试
//!
//! 运行方式:
//! ```bash
//! DOMAIN_MANAGER_API_URL=https://<project>.mockapi.io/domain \
//!     cargo test -p domain-manager-api --test live_api_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use domain_manager_api::{DomainApi, DomainStatus, UpdateDomainRequest};

#[tokio::test]
#[ignore]
async fn test_live_list_domains() {
    skip_if_no_env!("DOMAIN_MANAGER_API_URL");

    let ctx = TestContext::from_env().expect("创建测试上下文失败");
    let domains = require_ok!(ctx.api.list_domains().await, "list_domains 调用失败");

    println!("✓ list_domains 测试通过，共 {} 个域名", domains.len());
}

#[tokio::test]
#[ignore]
async fn test_live_create_defaults() {
    skip_if_no_env!("DOMAIN_MANAGER_API_URL");

    let ctx = TestContext::from_env().expect("创建测试上下文失败");
    let before = chrono::Utc::now().timestamp();
    let created = ctx.create_test_domain().await.expect("创建测试域名失败");

    assert_eq!(created.status, DomainStatus::Unverified);
    assert!(created.is_active);
    let created_at = created.created_date.expect("缺少 createdDate");
    assert!((created_at - before).abs() <= 5, "createdDate 偏差过大");

    ctx.cleanup_all_test_domains().await;
    println!("✓ create 默认值测试通过: {}", created.domain);
}

#[tokio::test]
#[ignore]
async fn test_live_verify_and_delete() {
    skip_if_no_env!("DOMAIN_MANAGER_API_URL");

    let ctx = TestContext::from_env().expect("创建测试上下文失败");
    let created = ctx.create_test_domain().await.expect("创建测试域名失败");

    // 验证
    let patch = UpdateDomainRequest {
        domain: Some(created.domain.clone()),
        is_active: Some(created.is_active),
        status: Some(DomainStatus::Verified),
        ..Default::default()
    };
    let updated = require_ok!(
        ctx.api.update_domain(&created.id, &patch).await,
        "update_domain 调用失败"
    );
    assert_eq!(updated.status, DomainStatus::Verified);
    assert_eq!(updated.domain, created.domain);

    let fetched = require_ok!(ctx.api.get_domain(&created.id).await, "get_domain 调用失败");
    assert_eq!(fetched.status, DomainStatus::Verified);

    // 删除
    require_ok!(
        ctx.api.delete_domain(&created.id).await,
        "delete_domain 调用失败"
    );
    let domains = require_ok!(ctx.api.list_domains().await, "list_domains 调用失败");
    assert!(
        domains.iter().all(|d| d.id != created.id),
        "删除后列表中不应再包含该域名"
    );

    println!("✓ verify/delete 测试通过");
}
