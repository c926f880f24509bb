use crate::modules::feedback::application::domain::entities::{
    FeedbackCategory, FeedbackStatus,
};
use crate::modules::feedback::application::ports::outgoing::FeedbackFilters;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::submit_feedback::FeedbackResponse;

#[derive(Deserialize, IntoParams)]
pub struct FeedbackQueryParams {
    /// pending | reviewed | resolved | closed
    pub status: Option<String>,
    /// general | bug | feature | improvement | complaint
    pub category: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminFeedbackResponse {
    #[serde(flatten)]
    pub feedback: FeedbackResponse,
    #[schema(example = "farmer1")]
    pub owner_username: Option<String>,
    #[schema(example = "f1@example.com")]
    pub owner_email: Option<String>,
}

/// List feedback for moderation
///
/// Newest-first, capped, with minimal owner identity attached. Unknown
/// filter values are ignored rather than erroring the listing.
#[utoipa::path(
    get,
    path = "/api/admin/feedback",
    tag = "admin",
    params(FeedbackQueryParams),
    responses(
        (status = 200, description = "Feedback rows", body = Vec<AdminFeedbackResponse>),
    )
)]
#[get("/api/admin/feedback")]
pub async fn list_feedback_handler(
    params: web::Query<FeedbackQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let filters = FeedbackFilters {
        status: params.status.as_deref().and_then(FeedbackStatus::parse),
        category: params
            .category
            .as_deref()
            .and_then(FeedbackCategory::parse),
    };

    match data.list_feedback_use_case.execute(filters).await {
        Ok(rows) => ApiResponse::success(
            rows.into_iter()
                .map(|row| AdminFeedbackResponse {
                    feedback: FeedbackResponse::from(row.feedback),
                    owner_username: row.owner_username,
                    owner_email: row.owner_email,
                })
                .collect::<Vec<_>>(),
        ),
        Err(err) => {
            error!(error = %err, "Feedback listing failed");
            ApiResponse::internal_error()
        }
    }
}
