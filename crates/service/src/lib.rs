//! Service layer: account signup/login, the payslip catalog and the HR chat
//! responder.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Framework independent; the `server` crate adapts it to HTTP.

pub mod auth;
pub mod chat;
pub mod payslip;
#[cfg(test)]
pub mod test_support;
