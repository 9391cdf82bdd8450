use axum::{extract::State, Json};
use tracing::info;

use service::auth::domain::{AccountView, LoginInput, SignupInput};

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath},
    state::ServerState,
};

#[utoipa::path(
    post, path = "/signup", tag = "auth",
    request_body = crate::openapi::SignupRequest,
    responses(
        (status = 200, description = "Account created", body = crate::openapi::AccountDoc),
        (status = 400, description = "Email already registered / Username already taken"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn signup(State(state): State<ServerState>, ApiJson(input): ApiJson<SignupInput>) -> Result<Json<AccountView>, JsonApiError> {
    let account = state.auth.signup(input).await?;
    info!(account_id = account.id, "signup");
    Ok(Json(account.into()))
}

#[utoipa::path(
    post, path = "/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged In", body = crate::openapi::AccountDoc),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(State(state): State<ServerState>, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<AccountView>, JsonApiError> {
    let account = state.auth.login(input).await?;
    Ok(Json(account.into()))
}

#[utoipa::path(
    get, path = "/users/me/{user_id}", tag = "auth",
    params(("user_id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AccountDoc),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_account(State(state): State<ServerState>, ApiPath(user_id): ApiPath<i32>) -> Result<Json<AccountView>, JsonApiError> {
    let account = state.auth.get_account(user_id).await?;
    Ok(Json(account.into()))
}
