use axum::Json;

use service::chat::{respond, ChatReply, ChatRequest};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;

#[utoipa::path(
    post, path = "/chat", tag = "chat",
    request_body = crate::openapi::ChatRequestDoc,
    responses(
        (status = 200, description = "Assistant reply", body = crate::openapi::ChatReplyDoc),
        (status = 400, description = "No messages provided")
    )
)]
pub async fn chat(ApiJson(req): ApiJson<ChatRequest>) -> Result<Json<ChatReply>, JsonApiError> {
    let reply = respond(&req.messages)?;
    Ok(Json(ChatReply { message: reply.to_string() }))
}
