//! Service layer

mod domain_service;

pub use domain_service::{DomainListSubscription, DomainService, QueryEvent};
