//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_manager_api::RemoteError;

/// A field failed client-side validation; no request was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Name of the offending field (wire name, e.g. `domain`).
    pub field: &'static str,
    /// Description of what's wrong.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error (caught before any network call)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Remote call failed (converting from library)
    #[error("{0}")]
    Remote(#[from] RemoteError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Remote(e) => e.is_expected(),
        }
    }

    /// Text suitable for a transient notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.message.clone(),
            Self::Remote(e) => e.display_message().to_string(),
        }
    }

    /// The remote error, if this failure came from the network.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
