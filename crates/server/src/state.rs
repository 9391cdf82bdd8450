use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{repo::seaorm::SeaOrmAccountRepository, AuthConfig, AuthService};
use service::payslip::PayslipCatalog;

pub type AccountService = AuthService<SeaOrmAccountRepository>;

/// Shared handler state; cloned per request, everything inside is `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AccountService>,
    pub payslips: Arc<PayslipCatalog>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth_cfg: AuthConfig) -> Self {
        let repo = Arc::new(SeaOrmAccountRepository::new(db));
        Self {
            auth: Arc::new(AuthService::new(repo, auth_cfg)),
            payslips: Arc::new(PayslipCatalog::default()),
        }
    }
}
