use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct SignupRequest { pub email: String, pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct AccountDoc {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub role: String,
}

#[derive(ToSchema)]
pub struct PayslipDoc {
    pub month: String,
    pub basic: i64,
    pub hra: i64,
    pub conveyance: i64,
    pub medical: i64,
    pub deductions: i64,
}

#[derive(ToSchema)]
pub struct ChatMessageDoc { pub role: String, pub content: String }

#[derive(ToSchema)]
pub struct ChatRequestDoc { pub messages: Vec<ChatMessageDoc> }

#[derive(ToSchema)]
pub struct ChatReplyDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::auth::get_account,
        crate::routes::payslips::list,
        crate::routes::chat::chat,
    ),
    components(
        schemas(
            HealthResponse,
            SignupRequest,
            LoginRequest,
            AccountDoc,
            PayslipDoc,
            ChatMessageDoc,
            ChatRequestDoc,
            ChatReplyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "payslips"),
        (name = "chat")
    )
)]
pub struct ApiDoc;
