//! Persistence layer: the `account` entity, connection bootstrap and
//! model-level validation shared by the service crate.

pub mod errors;
pub mod db;
pub mod account;

#[cfg(test)]
mod tests;
