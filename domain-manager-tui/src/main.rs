//! Domain Manager TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 远程调用 (`backend/`)
//!
//!
//! main.rs
//! Domain Manager TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     JsonConfigService::load()   // 读取配置（文件 + 环境变量）
//!     init_logging()              // 日志写入文件，不干扰终端
//!     Runtime::new()              // tokio 运行时，供 Backend 层派发请求
//!     CoreService::new()          // 订阅域名列表
//!     init_terminal()             // 进入备用屏幕
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 终端在配置、日志、运行时都准备好之后才初始化：
//! 前面任一步失败时，错误信息直接打印在普通终端上。
//!
//! 主循环在主线程上同步运行，远程请求在 tokio 的工作线程上执行，
//! 两者之间只通过 Command 与 AppMessage 通信。
//!

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use domain_manager_api::HttpDomainApi;

use backend::{config_dir, ConfigService, CoreService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config_service = JsonConfigService::new();
    let config = config_service
        .load()
        .context("Failed to load configuration")?;

    view::theme::set_theme(config.theme);

    // 2. 初始化日志
    let log_path = init_logging(&config_dir(), &config.log_level)?;
    log::info!("Logging to {}", log_path.display());
    log::info!("Config file: {}", config_service.path().display());

    // 语言解析可能产生警告，需在日志就绪后进行
    let language = config.language();
    i18n::set_language(language);
    log::info!(
        "API base URL: {}, language: {}",
        config.api_base_url,
        language.code()
    );

    // 3. 创建运行时与后端服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let api = HttpDomainApi::with_timeout(&config.api_base_url, config.request_timeout())
        .context("Failed to create HTTP client")?;
    let mut core = CoreService::new(Arc::new(api), runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new();

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut core);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    } else {
        log::info!("Exited normally");
    }

    // 8. 返回结果
    result
}
