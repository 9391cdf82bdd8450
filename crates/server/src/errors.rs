use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::chat::ChatError;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.error, "detail": self.detail}))).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(_) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(e.to_string())),
            AuthError::DuplicateEmail | AuthError::DuplicateUsername => {
                Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string()))
            }
            AuthError::InvalidCredentials => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string())),
            AuthError::NotFound => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            AuthError::HashError(_) | AuthError::Repository(_) => {
                error!(code = e.code(), err = %e, "account operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<ChatError> for JsonApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::EmptyConversation => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string())),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::from_rejection(r.status(), r.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::from_rejection(r.status(), r.body_text())
    }
}

impl JsonApiError {
    fn from_rejection(status: StatusCode, detail: String) -> Self {
        let error = if status == StatusCode::UNPROCESSABLE_ENTITY {
            "Validation Error"
        } else {
            status.canonical_reason().unwrap_or("Bad Request")
        };
        Self::new(status, error, Some(detail))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
