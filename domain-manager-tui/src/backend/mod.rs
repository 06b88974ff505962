//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   Update 层 ──排入──▶ App::commands ──取出──▶ CoreService::execute          │
//！│                                                   │ tokio::spawn           │
//！│                                                   ▼                        │
//！│                                       domain-manager-core::DomainService   │
//！│                                                   │                        │
//！│   主循环 ◀──try_recv── mpsc ◀──────── BackendMessage / QueryEvent           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的远程调用。
//! 通过 domain-manager-core 库访问域名 REST API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // 后端命令定义
//!         mod config_service;     // 配置加载（JSON 文件 + 环境变量）
//!         mod core_service;       // 核心服务入口
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     CoreService 持有 DomainService 与 tokio 运行时句柄。
//!
//!         创建时：
//!             1. 创建 DomainService（内部持有查询缓存）
//!             2. 订阅域名列表，后台任务把每个 QueryEvent 转发到主循环
//!
//!         execute(command)：
//!             - 在运行时上 spawn 一个任务执行命令
//!             - 写操作的结果以 BackendMessage 发回
//!             - 列表结果只经由订阅事件发回（写操作成功后会自动重新拉取）
//!
//!         主循环每轮调用 try_recv() 取出全部已完成的结果，交给 Update 层。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件：<config_dir>/domain-manager-tui/config.json（只读）
//!     环境变量 DOMAIN_MANAGER_API_URL 覆盖 apiBaseUrl。
//!

mod command;
pub(crate) mod config_service;
mod core_service;

pub use command::Command;
pub use config_service::{config_dir, ConfigService, JsonConfigService};
pub use core_service::CoreService;
