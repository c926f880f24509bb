use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::deactivate_account::DeactivateAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct DeactivateAccountRequest {
    /// Current password, re-verified before deactivation
    pub password: String,
}

/// Deactivate the caller's account
///
/// Soft deactivation only: the row stays, history stays, the email and
/// username remain reserved. Re-running against an already deactivated
/// account succeeds.
#[utoipa::path(
    delete,
    path = "/api/user/delete",
    tag = "user",
    request_body = DeactivateAccountRequest,
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "Account not found"),
    ),
    security(("bearer_token" = []))
)]
#[delete("/api/user/delete")]
pub async fn deactivate_account_handler(
    account: AuthenticatedAccount,
    body: web::Json<DeactivateAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .deactivate_account_use_case
        .execute(account.account_id, &body.password)
        .await
    {
        Ok(()) => {
            info!(account_id = %account.account_id, "Account deactivated");
            ApiResponse::no_content()
        }
        Err(DeactivateAccountError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid password")
        }
        Err(DeactivateAccountError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(err) => {
            error!(error = %err, "Account deactivation failed");
            ApiResponse::internal_error()
        }
    }
}
