//! 配置服务
//!
//! 配置文件位于 `<config_dir>/domain-manager-tui/config.json`，所有字段可选。
//! 文件不存在时使用默认值；文件格式错误在启动时报告。

use std::path::{Path, PathBuf};
use std::time::Duration;

use domain_manager_api::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖 `apiBaseUrl` 的环境变量
pub const API_URL_ENV: &str = "DOMAIN_MANAGER_API_URL";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("domain-manager-tui")
}

/// 获取配置文件路径
fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub theme: Theme,
    pub language: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// 界面语言，无法识别时回退到英文
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to en-US", self.language);
            Language::EnUs
        })
    }

    /// 请求超时（至少 1 秒）
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// 应用环境变量覆盖（空值忽略）
    fn apply_api_url_override(&mut self, value: Option<String>) {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new() -> Self {
        Self::with_path(config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = self.read_file()?;
        config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "domain-manager-tui-{}-{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = JsonConfigService::with_path(temp_path("missing"));
        let config = service.read_file().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{"theme":"light","requestTimeoutSecs":5}"#).unwrap();

        let config = JsonConfigService::with_path(&path).read_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn malformed_file_is_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonConfigService::with_path(&path).read_file().unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_override_replaces_url() {
        let mut config = AppConfig::default();
        config.apply_api_url_override(Some("http://localhost:3000/domain".to_string()));
        assert_eq!(config.api_base_url, "http://localhost:3000/domain");

        config.apply_api_url_override(Some("   ".to_string()));
        assert_eq!(config.api_base_url, "http://localhost:3000/domain");
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "fr-FR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn zero_timeout_clamped() {
        let config = AppConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
