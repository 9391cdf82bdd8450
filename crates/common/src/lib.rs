//! Shared helpers used by every crate in the workspace: logging setup,
//! runtime directory checks and small transport DTOs.

pub mod types;
pub mod utils;
pub mod env;
