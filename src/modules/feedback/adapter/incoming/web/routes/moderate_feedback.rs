use crate::modules::feedback::application::use_cases::moderate_feedback::ModerateFeedbackError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::submit_feedback::FeedbackResponse;

#[derive(Deserialize, ToSchema)]
pub struct ModerateFeedbackRequest {
    /// pending | reviewed | resolved | closed; may only move forward
    #[schema(example = "reviewed")]
    pub status: String,
    pub admin_response: Option<String>,
}

fn map_moderate_error(err: ModerateFeedbackError) -> HttpResponse {
    match &err {
        ModerateFeedbackError::FeedbackNotFound => {
            ApiResponse::not_found("FEEDBACK_NOT_FOUND", "Feedback not found")
        }
        ModerateFeedbackError::InvalidStatus => {
            ApiResponse::bad_request("INVALID_STATUS", "Unknown feedback status")
        }
        ModerateFeedbackError::BackwardTransition { .. } => ApiResponse::bad_request(
            "INVALID_STATUS_TRANSITION",
            "Feedback status can only move forward",
        ),
        ModerateFeedbackError::ResponseTooLong => ApiResponse::bad_request(
            "RESPONSE_TOO_LONG",
            "Response cannot exceed 1000 characters",
        ),
        other => {
            error!(error = %other, "Feedback moderation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Moderate a feedback entry
#[utoipa::path(
    patch,
    path = "/api/admin/feedback/{id}",
    tag = "admin",
    request_body = ModerateFeedbackRequest,
    responses(
        (status = 200, description = "Feedback updated", body = FeedbackResponse),
        (status = 400, description = "Unknown status or backward transition"),
        (status = 404, description = "Unknown feedback"),
    )
)]
#[patch("/api/admin/feedback/{id}")]
pub async fn moderate_feedback_handler(
    path: web::Path<Uuid>,
    body: web::Json<ModerateFeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();

    match data
        .moderate_feedback_use_case
        .execute(path.into_inner(), &body.status, body.admin_response)
        .await
    {
        Ok(record) => ApiResponse::success(FeedbackResponse::from(record)),
        Err(err) => map_moderate_error(err),
    }
}
