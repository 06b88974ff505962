//! # domain-manager-api
//!
//! Typed access to the remote domain collection (`/domain`), a plain REST
//! resource serving flat JSON records.
//!
//! | Operation | HTTP |
//! |-----------|------|
//! | [`DomainApi::list_domains`] | `GET /domain` |
//! | [`DomainApi::get_domain`] | `GET /domain/{id}` |
//! | [`DomainApi::create_domain`] | `POST /domain` |
//! | [`DomainApi::update_domain`] | `PUT /domain/{id}` |
//! | [`DomainApi::delete_domain`] | `DELETE /domain/{id}` |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_manager_api::{DomainApi, HttpDomainApi, NewDomain, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpDomainApi::new(DEFAULT_BASE_URL)?;
//!
//!     let created = api.create_domain(NewDomain::new("example.com")).await?;
//!     println!("created {} ({})", created.domain, created.status.as_str());
//!
//!     for record in api.list_domains().await? {
//!         println!("{} active={}", record.domain, record.is_active);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, RemoteError>`](RemoteError).
//! `RemoteError::status` is `None` for transport failures and the HTTP status
//! otherwise; `RemoteError::message` holds the server's `message` field (or
//! body text) when present. Nothing is retried automatically.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{DEFAULT_BASE_URL, HttpDomainApi};
pub use error::{GENERIC_ERROR_MESSAGE, RemoteError, Result};
pub use http_client::DEFAULT_REQUEST_TIMEOUT_SECS;
pub use traits::DomainApi;
pub use types::{CreateDomainPayload, DomainRecord, DomainStatus, NewDomain, UpdateDomainRequest};
