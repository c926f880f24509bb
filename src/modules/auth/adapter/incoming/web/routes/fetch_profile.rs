use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::auth::application::domain::entities::PublicProfile;
use crate::modules::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// Account fields safe for the wire. There is no password field here by
/// construction.
#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    #[schema(example = "farmer1")]
    pub username: String,
    #[schema(example = "f1@example.com")]
    pub email: String,
    pub location: Option<String>,
    #[schema(example = 2.5)]
    pub farm_size: Option<f64>,
    pub crops: Vec<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PublicProfile> for ProfileResponse {
    fn from(profile: PublicProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username,
            email: profile.email,
            location: profile.location,
            farm_size: profile.farm_size,
            crops: profile.crops,
            is_active: profile.is_active,
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}

/// Fetch the caller's own profile
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = "user",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "Missing authorization header"),
        (status = 403, description = "Invalid or expired token"),
        (status = 404, description = "Account no longer exists"),
    ),
    security(("bearer_token" = []))
)]
#[get("/api/user/profile")]
pub async fn fetch_profile_handler(
    account: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_profile_use_case
        .execute(account.account_id)
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(FetchProfileError::AccountNotFound) => {
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        Err(err) => {
            error!(error = %err, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
