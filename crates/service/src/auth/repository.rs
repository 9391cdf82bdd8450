use async_trait::async_trait;

use super::domain::{Account, NewAccount};
use super::errors::AuthError;

/// Repository abstraction over the credential store.
///
/// `insert` is the authoritative uniqueness check: implementations must
/// reject a duplicate email (first) or username atomically with the write.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AuthError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AuthError>;
    async fn insert(&self, new: NewAccount) -> Result<Account, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    use models::account::DEFAULT_ROLE;

    #[derive(Default)]
    struct State {
        last_id: i32,
        accounts: Vec<Account>,
    }

    /// All state sits behind one lock, so check-and-insert is atomic.
    #[derive(Default)]
    pub struct MockAccountRepository {
        state: Mutex<State>,
    }

    impl MockAccountRepository {
        fn state(&self) -> Result<MutexGuard<'_, State>, AuthError> {
            self.state.lock().map_err(|_| AuthError::Repository("mock repository poisoned".into()))
        }

        pub fn len(&self) -> Result<usize, AuthError> {
            Ok(self.state()?.accounts.len())
        }

        pub fn is_empty(&self) -> Result<bool, AuthError> { Ok(self.len()? == 0) }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AuthError> {
            Ok(self.state()?.accounts.iter().find(|a| a.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
            Ok(self.state()?.accounts.iter().find(|a| a.email == email).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AuthError> {
            Ok(self.state()?.accounts.iter().find(|a| a.username == username).cloned())
        }

        async fn insert(&self, new: NewAccount) -> Result<Account, AuthError> {
            let mut state = self.state()?;
            if state.accounts.iter().any(|a| a.email == new.email) {
                return Err(AuthError::DuplicateEmail);
            }
            if state.accounts.iter().any(|a| a.username == new.username) {
                return Err(AuthError::DuplicateUsername);
            }
            state.last_id += 1;
            let account = Account {
                id: state.last_id,
                email: new.email,
                username: new.username,
                password_hash: new.password_hash,
                is_active: true,
                role: DEFAULT_ROLE.to_string(),
            };
            state.accounts.push(account.clone());
            Ok(account)
        }
    }

}
