//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Account creation, credential verification and account lookup live here;
//! nothing else in the workspace touches the account table directly.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::{AuthConfig, AuthService};
