//! 基于 reqwest 的域名 API 客户端

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::error::Result;
use crate::http_client::{DEFAULT_REQUEST_TIMEOUT_SECS, HttpUtils, create_http_client};
use crate::traits::DomainApi;
use crate::types::{DomainRecord, NewDomain, UpdateDomainRequest};

/// 默认的 mock API 集合地址
pub const DEFAULT_BASE_URL: &str = "https://6797aa2bc2c861de0c6d964c.mockapi.io/domain";

/// 域名集合 REST 客户端
///
/// `base_url` 指向集合本身（如 `https://host/domain`），
/// 单条记录位于 `{base_url}/{id}`。
pub struct HttpDomainApi {
    client: Client,
    base_url: String,
}

impl HttpDomainApi {
    /// 使用默认超时创建客户端
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// 使用指定的请求超时创建客户端
    pub fn with_timeout(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(base_url, create_http_client(request_timeout)?))
    }

    /// 复用外部构建的 `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id))
    }
}

#[async_trait]
impl DomainApi for HttpDomainApi {
    async fn list_domains(&self) -> Result<Vec<DomainRecord>> {
        let url = self.base_url.clone();
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&body, status)
    }

    async fn get_domain(&self, id: &str) -> Result<DomainRecord> {
        let url = self.item_url(id);
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&body, status)
    }

    async fn create_domain(&self, input: NewDomain) -> Result<DomainRecord> {
        let url = self.base_url.clone();
        let payload = input.into_payload(Utc::now().timestamp());
        log::debug!(
            "Request Body: {}",
            serde_json::to_string(&payload).unwrap_or_else(|_| "<unserializable>".to_string())
        );

        let (status, body) =
            HttpUtils::execute_request(self.client.post(&url).json(&payload), "POST", &url)
                .await?;
        HttpUtils::parse_json(&body, status)
    }

    async fn update_domain(&self, id: &str, patch: &UpdateDomainRequest) -> Result<DomainRecord> {
        if patch.is_empty() {
            log::warn!("PUT {} with an empty patch", self.item_url(id));
        }
        let url = self.item_url(id);
        let (status, body) =
            HttpUtils::execute_request(self.client.put(&url).json(patch), "PUT", &url).await?;
        HttpUtils::parse_json(&body, status)
    }

    async fn delete_domain(&self, id: &str) -> Result<()> {
        let url = self.item_url(id);
        // 任意 2xx 均视为成功，响应体（可能为空）忽略
        HttpUtils::execute_request(self.client.delete(&url), "DELETE", &url)
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for HttpDomainApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDomainApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
