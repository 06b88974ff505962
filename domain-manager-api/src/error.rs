use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::truncate_for_log;

/// Fallback text shown when a failed call carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Request failed";

/// Unified error type for all remote domain operations.
///
/// Failures coming from the transport (connection refused, timeout, unreadable
/// body) carry no `status`. Failures reported by the server carry the HTTP
/// status and whatever message could be extracted from the error body.
///
/// The error is serializable so it can be forwarded as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error(
    "{}: {}",
    origin(.status.as_ref().copied()),
    message_or_generic(.message.as_deref())
)]
pub struct RemoteError {
    /// HTTP status code, `None` when the request never produced a response.
    pub status: Option<u16>,
    /// Human-readable message, if the server or transport provided one.
    pub message: Option<String>,
}

impl RemoteError {
    /// A transport-level failure (no HTTP response was obtained).
    pub fn transport(detail: impl ToString) -> Self {
        Self {
            status: None,
            message: Some(detail.to_string()),
        }
    }

    /// A non-2xx HTTP response. The message is extracted from the body.
    pub fn http(status: u16, body: &str) -> Self {
        Self {
            status: Some(status),
            message: extract_message(body),
        }
    }

    /// The response arrived but its body could not be decoded.
    pub fn decode(status: u16, detail: impl ToString) -> Self {
        Self {
            status: Some(status),
            message: Some(format!("Invalid response body: {}", detail.to_string())),
        }
    }

    /// Text suitable for a user-facing notification.
    ///
    /// Falls back to [`GENERIC_ERROR_MESSAGE`] when no message is available.
    pub fn display_message(&self) -> &str {
        message_or_generic(self.message.as_deref())
    }

    /// 是否为预期行为（4xx：请求有误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }
}

fn origin(status: Option<u16>) -> String {
    match status {
        Some(status) => format!("HTTP {status}"),
        None => "Network error".to_string(),
    }
}

fn message_or_generic(message: Option<&str>) -> &str {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(GENERIC_ERROR_MESSAGE)
}

/// Convenience type alias for `Result<T, RemoteError>`.
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Pull a message out of an error response body.
///
/// Tries, in order: a JSON object with a string `message` field, a bare JSON
/// string (the mock API answers `"Not found"`), then the trimmed plain text.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(_) => None,
        Err(_) => Some(truncate_for_log(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_json_object() {
        let e = RemoteError::http(400, r#"{"message":"domain is required","code":7}"#);
        assert_eq!(e.status, Some(400));
        assert_eq!(e.message.as_deref(), Some("domain is required"));
    }

    #[test]
    fn message_from_json_string() {
        let e = RemoteError::http(404, r#""Not found""#);
        assert_eq!(e.message.as_deref(), Some("Not found"));
    }

    #[test]
    fn message_from_plain_text() {
        let e = RemoteError::http(500, "  upstream exploded \n");
        assert_eq!(e.message.as_deref(), Some("upstream exploded"));
    }

    #[test]
    fn no_message_for_empty_or_unrelated_json() {
        assert_eq!(RemoteError::http(502, "").message, None);
        assert_eq!(RemoteError::http(500, r#"{"error":true}"#).message, None);
        assert_eq!(RemoteError::http(500, "[1,2]").message, None);
    }

    #[test]
    fn display_falls_back_to_generic_message() {
        let e = RemoteError::http(503, "");
        assert_eq!(e.display_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(e.to_string(), "HTTP 503: Request failed");
    }

    #[test]
    fn display_transport_error() {
        let e = RemoteError::transport("connection refused");
        assert_eq!(e.status, None);
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn usable_as_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(RemoteError::http(404, r#""Not found""#));
        assert_eq!(e.to_string(), "HTTP 404: Not found");
        assert!(e.source().is_none());
    }

    #[test]
    fn expected_only_for_client_errors() {
        assert!(RemoteError::http(404, "").is_expected());
        assert!(!RemoteError::http(500, "").is_expected());
        assert!(!RemoteError::transport("x").is_expected());
    }
}
