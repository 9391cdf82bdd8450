use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHash, Version,
};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument, warn};

use models::account::{validate_email, validate_username};

use super::domain::{Account, LoginInput, NewAccount, SignupInput};
use super::errors::AuthError;
use super::repository::AccountRepository;

/// Auth service configuration: Argon2id cost parameters for new hashes.
/// Verification always uses the parameters embedded in the stored hash.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { memory_kib: Params::DEFAULT_M_COST, iterations: Params::DEFAULT_T_COST, parallelism: Params::DEFAULT_P_COST }
    }
}

impl AuthConfig {
    fn hasher(&self) -> Result<Argon2<'static>, AuthError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AuthError::HashError(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Account business service independent of web framework
pub struct AuthService<R: AccountRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AccountRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Create an account with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAccountRepository};
    /// use service::auth::domain::SignupInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAccountRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { memory_kib: 8, iterations: 1, parallelism: 1 });
    /// let input = SignupInput { email: "user@example.com".into(), username: "user".into(), password: "Secret123".into() };
    /// let account = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(account.email, "user@example.com");
    /// assert_eq!(account.role, "employee");
    /// assert_ne!(account.password_hash, "Secret123");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email, username = %input.username))]
    pub async fn signup(&self, input: SignupInput) -> Result<Account, AuthError> {
        validate_email(&input.email)?;
        validate_username(&input.username)?;
        if input.password.is_empty() {
            return Err(AuthError::Validation("password required".into()));
        }

        // Fast path only; the repository insert is authoritative.
        if self.repo.find_by_email(&input.email).await?.is_some() {
            debug!("email already registered");
            return Err(AuthError::DuplicateEmail);
        }
        if self.repo.find_by_username(&input.username).await?.is_some() {
            debug!("username already taken");
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = self.hash_password(input.password).await?;
        let account = self
            .repo
            .insert(NewAccount { email: input.email, username: input.username, password_hash })
            .await?;
        info!(account_id = account.id, "account_created");
        Ok(account)
    }

    /// Authenticate by email and password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAccountRepository};
    /// use service::auth::domain::{SignupInput, LoginInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAccountRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { memory_kib: 8, iterations: 1, parallelism: 1 });
    /// let created = tokio_test::block_on(svc.signup(SignupInput { email: "u@e.com".into(), username: "u".into(), password: "Passw0rd".into() })).unwrap();
    /// let account = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(account.id, created.id);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<Account, AuthError> {
        let Some(account) = self.repo.find_by_email(&input.email).await? else {
            warn!("login_failed");
            return Err(AuthError::InvalidCredentials);
        };
        let stored = account.password_hash.clone();
        let password = input.password;
        let matches = tokio::task::spawn_blocking(move || verify_hash(&stored, &password))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))??;
        if !matches {
            warn!(account_id = account.id, "login_failed");
            return Err(AuthError::InvalidCredentials);
        }
        info!(account_id = account.id, "login_succeeded");
        Ok(account)
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: i32) -> Result<Account, AuthError> {
        self.repo.find_by_id(id).await?.ok_or(AuthError::NotFound)
    }

    /// Check `password` against the account's stored hash.
    pub fn verify_password(&self, account: &Account, password: &str) -> Result<bool, AuthError> {
        verify_hash(&account.password_hash, password)
    }

    /// Argon2 is CPU and memory bound; it runs on the blocking pool.
    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let cfg = self.cfg.clone();
        tokio::task::spawn_blocking(move || -> Result<String, AuthError> {
            let salt = SaltString::generate(&mut OsRng);
            let hash = cfg
                .hasher()?
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| AuthError::HashError(e.to_string()))?
                .to_string();
            Ok(hash)
        })
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
    }
}

/// Verification uses the parameters embedded in the stored hash.
fn verify_hash(stored: &str, password: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repository::mock::MockAccountRepository;
    use crate::test_support::fast_auth_config;

    fn svc() -> AuthService<MockAccountRepository> {
        AuthService::new(Arc::new(MockAccountRepository::default()), fast_auth_config())
    }

    fn signup_input(email: &str, username: &str, password: &str) -> SignupInput {
        SignupInput { email: email.into(), username: username.into(), password: password.into() }
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput { email: email.into(), password: password.into() }
    }

    #[tokio::test]
    async fn signup_then_login_returns_same_identity() {
        let svc = svc();
        let created = svc.signup(signup_input("jane@example.com", "jane", "s3cret!")).await.unwrap();
        assert!(created.is_active);
        assert_eq!(created.role, "employee");

        let logged_in = svc.login(login_input("jane@example.com", "s3cret!")).await.unwrap();
        assert_eq!(logged_in.id, created.id);
        assert_eq!(logged_in, created);
    }

    #[tokio::test]
    async fn stored_hash_is_salted_and_verifiable() {
        let svc = svc();
        let a = svc.signup(signup_input("a@example.com", "a", "same-password")).await.unwrap();
        let b = svc.signup(signup_input("b@example.com", "b", "same-password")).await.unwrap();

        assert!(!a.password_hash.is_empty());
        assert_ne!(a.password_hash, "same-password");
        assert!(a.password_hash.starts_with("$argon2id$"));
        assert_ne!(a.password_hash, b.password_hash, "salts must differ");

        assert!(svc.verify_password(&a, "same-password").unwrap());
        assert!(!svc.verify_password(&a, "other-password").unwrap());
    }

    #[tokio::test]
    async fn configured_cost_lands_in_hash() {
        let svc = svc();
        let a = svc.signup(signup_input("a@example.com", "a", "pw")).await.unwrap();
        assert!(a.password_hash.contains("m=8,t=1,p=1"), "hash: {}", a.password_hash);
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let svc = svc();
        svc.signup(signup_input("dup@example.com", "first", "pw")).await.unwrap();
        let err = svc.signup(signup_input("dup@example.com", "second", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let svc = svc();
        svc.signup(signup_input("one@example.com", "same", "pw")).await.unwrap();
        let err = svc.signup(signup_input("two@example.com", "same", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUsername));
    }

    #[tokio::test]
    async fn email_check_wins_over_username_check() {
        let svc = svc();
        svc.signup(signup_input("x@example.com", "x", "pw")).await.unwrap();
        let err = svc.signup(signup_input("x@example.com", "x", "pw")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let svc = svc();
        svc.signup(signup_input("jane@example.com", "jane", "right")).await.unwrap();

        let wrong = svc.login(login_input("jane@example.com", "wrong")).await.unwrap_err();
        let unknown = svc.login(login_input("nobody@example.com", "right")).await.unwrap_err();
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert_eq!(wrong.code(), unknown.code());
    }

    #[tokio::test]
    async fn get_account_by_id() {
        let svc = svc();
        let created = svc.signup(signup_input("jane@example.com", "jane", "pw")).await.unwrap();
        assert_eq!(svc.get_account(created.id).await.unwrap(), created);
        assert!(matches!(svc.get_account(created.id + 1).await.unwrap_err(), AuthError::NotFound));
    }

    #[tokio::test]
    async fn signup_validates_input_before_touching_store() {
        let repo = Arc::new(MockAccountRepository::default());
        let svc = AuthService::new(repo.clone(), fast_auth_config());
        for input in [
            signup_input("not-an-email", "jane", "pw"),
            signup_input("jane@example.com", "   ", "pw"),
            signup_input("jane@example.com", "jane", ""),
        ] {
            let err = svc.signup(input).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "got {err:?}");
        }
        assert!(repo.is_empty().unwrap());
    }

    #[tokio::test]
    async fn corrupt_stored_hash_is_a_hash_error() {
        let svc = svc();
        let account = Account {
            id: 1,
            email: "a@example.com".into(),
            username: "a".into(),
            password_hash: "not-a-phc-string".into(),
            is_active: true,
            role: "employee".into(),
        };
        assert!(matches!(svc.verify_password(&account, "pw"), Err(AuthError::HashError(_))));
    }

    #[test]
    fn invalid_cost_is_rejected() {
        let cfg = AuthConfig { memory_kib: 1, iterations: 0, parallelism: 1 };
        assert!(matches!(cfg.hasher(), Err(AuthError::HashError(_))));
        assert!(AuthConfig::default().hasher().is_ok());
    }
}
