//! Generic HTTP client tools
//!
//! Shared request execution for the domain API client: sending, logging,
//! status classification and JSON decoding live here so the endpoint methods
//! only build requests.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(request_timeout: Duration) -> Result<Client, RemoteError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .map_err(|e| RemoteError::transport(format!("Failed to create HTTP client: {e}")))
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name, used for logs
    /// * `url` - request URL, used for logs
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for 2xx responses
    /// * `Err(RemoteError)` with `status: None` for transport failures
    /// * `Err(RemoteError)` with the HTTP status for non-2xx responses
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), RemoteError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::transport(format!("Request timed out: {e}"))
            } else {
                RemoteError::transport(e)
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| RemoteError::transport(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        if !(200..300).contains(&status_code) {
            let err = RemoteError::http(status_code, &response_text);
            if err.is_expected() {
                log::warn!("{method_name} {url} failed: {err}");
            } else {
                log::error!("{method_name} {url} failed: {err}");
            }
            return Err(err);
        }

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(RemoteError)` - parsing failed; carries the response status
    pub fn parse_json<T>(response_text: &str, status_code: u16) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            RemoteError::decode(status_code, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, RemoteError> = HttpUtils::parse_json(r#"{"x":42}"#, 200);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_keeps_status() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, RemoteError> = HttpUtils::parse_json("not json", 201);
        let err = result.unwrap_err();
        assert_eq!(err.status, Some(201));
        assert!(err.display_message().starts_with("Invalid response body"));
    }

    #[test]
    fn client_builds_with_timeout() {
        assert!(create_http_client(Duration::from_secs(5)).is_ok());
    }
}
