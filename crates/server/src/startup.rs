use std::net::SocketAddr;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tracing::info;

use configs::{AppConfig, AuthSettings, CorsConfig};
use service::auth::AuthConfig;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// CORS for the configured portal origins. Credentials are allowed, so
/// request headers are mirrored instead of using a wildcard.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| StartupError::InvalidConfig(format!("bad cors origin: {o}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn auth_config(s: &AuthSettings) -> AuthConfig {
    AuthConfig {
        memory_kib: s.argon2_memory_kib,
        iterations: s.argon2_iterations,
        parallelism: s.argon2_parallelism,
    }
}

/// Prepare the database directory, connect, migrate and assemble handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    common::env::ensure_env(&cfg.database.url).await?;
    let db = models::db::connect_and_migrate(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    Ok(ServerState::new(db, auth_config(&cfg.auth)))
}

pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(cfg).await?;
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(state, cors))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse::<SocketAddr>()
        .map_err(|e| StartupError::InvalidConfig(format!("bad server address: {e}")))?;
    Ok(addr)
}

/// Build the app from an already validated config and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "hr portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
