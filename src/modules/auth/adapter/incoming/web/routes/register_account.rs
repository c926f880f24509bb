use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RegisteredAccount {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Username, trimmed
    #[schema(example = "farmer1")]
    pub username: String,

    /// Email, lowercased and trimmed
    #[schema(example = "f1@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponseBody {
    #[schema(example = "Account created successfully")]
    pub message: String,
    pub account: RegisteredAccount,
}

fn map_register_error(err: RegisterAccountError) -> HttpResponse {
    match &err {
        RegisterAccountError::EmailAlreadyExists => {
            warn!("Registration rejected: duplicate email");
            ApiResponse::conflict("DUPLICATE_EMAIL", "Email already registered")
        }
        RegisterAccountError::UsernameAlreadyExists => {
            warn!("Registration rejected: duplicate username");
            ApiResponse::conflict("DUPLICATE_USERNAME", "Username already taken")
        }
        other => {
            error!(error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Blank fields and malformed emails are rejected during body
/// deserialization; duplicates are rejected before anything is persisted.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterResponseBody>)
        ),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Duplicate email or username", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_account_handler(
    body: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .register_account_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(account) => ApiResponse::created(RegisterResponseBody {
            message: "Account created successfully".to_string(),
            account: RegisteredAccount {
                id: account.id.to_string(),
                username: account.username,
                email: account.email,
            },
        }),
        Err(err) => map_register_error(err),
    }
}
