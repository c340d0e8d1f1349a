//! Member preferences: domain, repository, service.
//!
//! The three preference kinds share one upsert/query implementation keyed by
//! [`domain::PreferenceKind`].

pub mod domain;
pub mod repository;
pub mod service;
#[cfg(feature = "seaorm")]
pub mod repo;

pub use domain::PreferenceKind;
pub use service::PreferenceService;
