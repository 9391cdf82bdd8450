use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, TransactionTrait};
use tracing::debug;

use models::account;
use models::errors::ModelError;

use crate::auth::domain::{Account, NewAccount};
use crate::auth::errors::AuthError;
use crate::auth::repository::AccountRepository;

/// Credential store backed by the SeaORM `account` entity.
pub struct SeaOrmAccountRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Checks and insert share one transaction. Only used where a reader
    /// can wait on a writer's row lock instead of failing the upgrade.
    async fn create_checked(&self, new: &NewAccount) -> Result<account::Model, AuthError> {
        let txn = self.db.begin().await.map_err(|e| AuthError::Repository(e.to_string()))?;

        if account::find_by_email(&txn, &new.email).await?.is_some() {
            debug!("email taken inside transaction");
            return Err(AuthError::DuplicateEmail);
        }
        if account::find_by_username(&txn, &new.username).await?.is_some() {
            debug!("username taken inside transaction");
            return Err(AuthError::DuplicateUsername);
        }

        match account::create(&txn, &new.email, &new.username, new.password_hash.clone()).await {
            Ok(created) => {
                txn.commit().await.map_err(|e| AuthError::Repository(e.to_string()))?;
                Ok(created)
            }
            Err(ModelError::UniqueViolation(msg)) => {
                drop(txn);
                Err(self.resolve_violation(&new.email, &msg).await)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// SQLite cannot promote a deferred read transaction to a write while
    /// another connection does the same, so a single insert lets the unique
    /// indexes decide.
    async fn create_direct(&self, new: &NewAccount) -> Result<account::Model, AuthError> {
        match account::create(&self.db, &new.email, &new.username, new.password_hash.clone()).await {
            Ok(created) => Ok(created),
            Err(ModelError::UniqueViolation(msg)) => Err(self.resolve_violation(&new.email, &msg).await),
            Err(e) => Err(e.into()),
        }
    }

    /// Either index may fire first when both collide; email wins.
    async fn resolve_violation(&self, email: &str, msg: &str) -> AuthError {
        match account::find_by_email(&self.db, email).await {
            Ok(Some(_)) => AuthError::DuplicateEmail,
            Ok(None) => AuthError::from_unique_violation(msg),
            Err(e) => e.into(),
        }
    }
}

#[async_trait::async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AuthError> {
        Ok(account::find_by_id(&self.db, id).await?.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AuthError> {
        Ok(account::find_by_email(&self.db, email).await?.map(Account::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AuthError> {
        Ok(account::find_by_username(&self.db, username).await?.map(Account::from))
    }

    async fn insert(&self, new: NewAccount) -> Result<Account, AuthError> {
        let created = match self.db.get_database_backend() {
            DbBackend::Sqlite => self.create_direct(&new).await?,
            _ => self.create_checked(&new).await?,
        };
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::domain::{LoginInput, SignupInput};
    use crate::auth::AuthService;
    use crate::test_support::{fast_auth_config, get_db, get_file_db};

    fn new_account(email: &str, username: &str) -> NewAccount {
        NewAccount { email: email.into(), username: username.into(), password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA".into() }
    }

    #[tokio::test]
    async fn insert_and_find() -> anyhow::Result<()> {
        let repo = SeaOrmAccountRepository::new(get_db().await?);
        let created = repo.insert(new_account("jane@example.com", "jane")).await?;
        assert!(created.is_active);
        assert_eq!(created.role, "employee");

        assert_eq!(repo.find_by_id(created.id).await?, Some(created.clone()));
        assert_eq!(repo.find_by_email("jane@example.com").await?, Some(created.clone()));
        assert_eq!(repo.find_by_username("jane").await?, Some(created));
        assert_eq!(repo.find_by_email("nobody@example.com").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn insert_enforces_uniqueness_without_precheck() -> anyhow::Result<()> {
        let repo = SeaOrmAccountRepository::new(get_db().await?);
        repo.insert(new_account("jane@example.com", "jane")).await?;

        let err = repo.insert(new_account("jane@example.com", "other")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        let err = repo.insert(new_account("other@example.com", "jane")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
        let err = repo.insert(new_account("jane@example.com", "jane")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        Ok(())
    }

    #[tokio::test]
    async fn unique_index_violation_maps_to_duplicate() -> anyhow::Result<()> {
        let db = get_db().await?;
        account::create(&db, "jane@example.com", "jane", "hash".into()).await?;

        let err = account::create(&db, "jane@example.com", "other", "hash".into()).await.unwrap_err();
        assert!(matches!(AuthError::from(err), AuthError::DuplicateEmail));
        let err = account::create(&db, "other@example.com", "jane", "hash".into()).await.unwrap_err();
        assert!(matches!(AuthError::from(err), AuthError::DuplicateUsername));
        Ok(())
    }

    #[tokio::test]
    async fn service_flow_against_database() -> anyhow::Result<()> {
        let repo = Arc::new(SeaOrmAccountRepository::new(get_db().await?));
        let svc = AuthService::new(repo, fast_auth_config());

        let created = svc
            .signup(SignupInput { email: "jane@example.com".into(), username: "jane".into(), password: "pw-123".into() })
            .await?;
        let logged_in = svc.login(LoginInput { email: "jane@example.com".into(), password: "pw-123".into() }).await?;
        assert_eq!(logged_in.id, created.id);
        assert_ne!(logged_in.password_hash, "pw-123");

        let err = svc.login(LoginInput { email: "jane@example.com".into(), password: "nope".into() }).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(matches!(svc.get_account(created.id + 1).await.unwrap_err(), AuthError::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_signups_with_same_email_yield_one_account() -> anyhow::Result<()> {
        let repo = Arc::new(SeaOrmAccountRepository::new(get_db().await?));
        let svc = Arc::new(AuthService::new(repo.clone(), fast_auth_config()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.signup(SignupInput {
                    email: "race@example.com".into(),
                    username: format!("racer{i}"),
                    password: "pw".into(),
                })
                .await
            }));
        }

        let mut ok = 0;
        for h in handles {
            match h.await? {
                Ok(_) => ok += 1,
                Err(AuthError::DuplicateEmail) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(ok, 1);
        Ok(())
    }

    async fn file_backed_service(
        dir: &tempfile::TempDir,
    ) -> anyhow::Result<Arc<AuthService<SeaOrmAccountRepository>>> {
        let repo = Arc::new(SeaOrmAccountRepository::new(get_file_db(dir.path()).await?));
        Ok(Arc::new(AuthService::new(repo, fast_auth_config())))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_distinct_signups_all_succeed_on_file_db() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let svc = file_backed_service(&dir).await?;

        let mut handles = Vec::new();
        for i in 0..16 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.signup(SignupInput {
                    email: format!("user{i}@example.com"),
                    username: format!("user{i}"),
                    password: "pw".into(),
                })
                .await
            }));
        }

        let mut ids = Vec::new();
        for h in handles {
            match h.await? {
                Ok(account) => ids.push(account.id),
                Err(e) => panic!("signup failed without a collision: {e:?}"),
            }
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_same_email_signups_on_file_db() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let svc = file_backed_service(&dir).await?;

        let mut handles = Vec::new();
        for i in 0..16 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.signup(SignupInput {
                    email: "race@example.com".into(),
                    username: format!("racer{i}"),
                    password: "pw".into(),
                })
                .await
            }));
        }

        let mut ok = 0;
        for h in handles {
            match h.await? {
                Ok(_) => ok += 1,
                Err(AuthError::DuplicateEmail) => {}
                Err(other) => panic!("expected DuplicateEmail, got {other:?}"),
            }
        }
        assert_eq!(ok, 1);
        Ok(())
    }

    #[tokio::test]
    async fn email_wins_when_both_indexes_collide() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let repo = SeaOrmAccountRepository::new(get_file_db(dir.path()).await?);
        repo.insert(new_account("a@example.com", "a")).await?;
        repo.insert(new_account("b@example.com", "b")).await?;

        // username of one account, email of the other
        let err = repo.insert(new_account("b@example.com", "a")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        Ok(())
    }
}
