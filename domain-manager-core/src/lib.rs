//! Domain Manager Core Library
//!
//! Data layer shared by Domain Manager front-ends:
//! - Query cache keyed per read, invalidated by tag after writes (`cache`)
//! - Domain Service (reads, mutations, list subscriptions)
//! - List filtering and sorting (`filter`)
//! - Row action dispatch (`actions`)
//! - Creation form validation (`form`)
//!
//! The remote collection is reached through the [`DomainApi`] trait, so the
//! service can run against the HTTP client or an in-memory double.

pub mod actions;
pub mod cache;
pub mod error;
pub mod filter;
pub mod form;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use actions::{RowAction, RowEffect};
pub use cache::{CacheTag, QueryCache, QueryKey};
pub use domain_manager_api::{DomainApi, DomainRecord, DomainStatus, NewDomain, RemoteError};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{ListQuery, SortOrder};
pub use services::{DomainListSubscription, DomainService, QueryEvent};
