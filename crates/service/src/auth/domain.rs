use std::fmt;

use serde::{Deserialize, Serialize};

/// Signup input
#[derive(Clone, Serialize, Deserialize)]
pub struct SignupInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login input
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupInput")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Domain account, including the stored hash. Never serialized as is;
/// convert to [`AccountView`] before it leaves the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub role: String,
}

/// Row to insert; the store assigns `id`, `is_active` and `role`.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Public projection of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub role: String,
}

impl From<Account> for AccountView {
    fn from(a: Account) -> Self {
        Self { id: a.id, email: a.email, username: a.username, is_active: a.is_active, role: a.role }
    }
}

impl From<models::account::Model> for Account {
    fn from(m: models::account::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            username: m.username,
            password_hash: m.password_hash,
            is_active: m.is_active,
            role: m.role,
        }
    }
}
