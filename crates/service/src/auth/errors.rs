use thiserror::Error;

use models::errors::ModelError;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Username already taken")]
    DuplicateUsername,
    /// Deliberately the same for unknown emails and wrong passwords.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    NotFound,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::DuplicateEmail => 1002,
            AuthError::DuplicateUsername => 1003,
            AuthError::InvalidCredentials => 1004,
            AuthError::NotFound => 1005,
            AuthError::HashError(_) => 1101,
            AuthError::Repository(_) => 1200,
        }
    }

    /// Map a driver unique-violation message to the matching duplicate error.
    /// Email wins when the message is ambiguous.
    pub fn from_unique_violation(msg: &str) -> Self {
        let lower = msg.to_lowercase();
        if lower.contains("email") {
            AuthError::DuplicateEmail
        } else if lower.contains("username") {
            AuthError::DuplicateUsername
        } else {
            AuthError::Repository(msg.to_string())
        }
    }
}

impl From<ModelError> for AuthError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => AuthError::Validation(msg),
            ModelError::UniqueViolation(msg) => AuthError::from_unique_violation(&msg),
            ModelError::Db(msg) => AuthError::Repository(msg),
        }
    }
}
