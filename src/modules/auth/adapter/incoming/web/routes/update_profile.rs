use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::fetch_profile::ProfileResponse;

/// Patch body: omitted fields stay untouched.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "f1.new@example.com")]
    pub email: Option<String>,
    #[schema(example = "Nashik")]
    pub location: Option<String>,
    #[schema(example = 3.0)]
    pub farm_size: Option<f64>,
    pub crops: Option<Vec<String>>,
}

fn map_update_error(err: UpdateProfileError) -> HttpResponse {
    match &err {
        UpdateProfileError::AccountNotFound => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        UpdateProfileError::EmailAlreadyExists => {
            warn!("Profile update rejected: duplicate email");
            ApiResponse::conflict("DUPLICATE_EMAIL", "Email already registered")
        }
        UpdateProfileError::InvalidEmailFormat => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        UpdateProfileError::NegativeFarmSize => ApiResponse::bad_request(
            "INVALID_FARM_SIZE",
            "Farm size must be a non-negative number",
        ),
        UpdateProfileError::NoFieldsSupplied => {
            ApiResponse::bad_request("NO_FIELDS", "No profile fields supplied")
        }
        other => {
            error!(error = %other, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = "user",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Duplicate email"),
    ),
    security(("bearer_token" = []))
)]
#[put("/api/user/profile")]
pub async fn update_profile_handler(
    account: AuthenticatedAccount,
    body: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let input = UpdateProfileInput {
        email: body.email,
        location: body.location,
        farm_size: body.farm_size,
        crops: body.crops,
    };

    match data
        .update_profile_use_case
        .execute(account.account_id, input)
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(err) => map_update_error(err),
    }
}
