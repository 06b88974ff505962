//! 日志初始化
//!
//! TUI 占用了标准输出，日志写入 `<config_dir>/domain-manager-tui/domain-manager.log`。
//! `RUST_LOG` 优先于配置文件中的 `logLevel`。
//! `log` 宏（core / api 库使用）经 tracing-log 桥接到同一个订阅者。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE_NAME: &str = "domain-manager.log";

/// 初始化日志，返回日志文件路径
pub fn init_logging(dir: &Path, level: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Domain Manager TUI v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config_service::AppConfig;

    #[test]
    fn language_warning_reaches_log_file() {
        let dir = std::env::temp_dir().join(format!("domain-manager-log-{}", std::process::id()));
        let path = init_logging(&dir, "info").unwrap();

        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..AppConfig::default()
        };
        let _ = config.language();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Unknown language 'fr-FR'"));
        let _ = fs::remove_dir_all(&dir);
    }
}
