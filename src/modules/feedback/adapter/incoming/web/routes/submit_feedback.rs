use crate::modules::feedback::application::domain::entities::FeedbackRecord;
use crate::modules::feedback::application::use_cases::submit_feedback::{
    SubmitFeedbackError, SubmitFeedbackInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
pub struct SubmitFeedbackRequest {
    /// The submitting account's id
    pub user_id: Uuid,
    #[schema(example = "The blight detection saved my tomato crop.")]
    pub message: String,
    /// general | bug | feature | improvement | complaint (default general)
    pub category: Option<String>,
    /// 1-5
    #[schema(example = 5)]
    pub rating: Option<i16>,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Serialize, ToSchema)]
pub struct FeedbackResponse {
    pub id: String,
    pub user_id: String,
    pub message: String,
    #[schema(example = "general")]
    pub category: String,
    pub rating: Option<i16>,
    #[schema(example = "pending")]
    pub status: String,
    pub admin_response: Option<String>,
    pub is_public: bool,
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            message: record.message,
            category: record.category.as_str().to_string(),
            rating: record.rating,
            status: record.status.as_str().to_string(),
            admin_response: record.admin_response,
            is_public: record.is_public,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

fn map_submit_error(err: SubmitFeedbackError) -> HttpResponse {
    match &err {
        SubmitFeedbackError::OwnerNotFound => {
            ApiResponse::not_found("OWNER_NOT_FOUND", "Owner account not found")
        }
        SubmitFeedbackError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
        SubmitFeedbackError::MessageTooLong => {
            ApiResponse::bad_request("MESSAGE_TOO_LONG", "Message cannot exceed 1000 characters")
        }
        SubmitFeedbackError::InvalidCategory => {
            ApiResponse::bad_request("INVALID_CATEGORY", "Unknown feedback category")
        }
        SubmitFeedbackError::InvalidRating => {
            ApiResponse::bad_request("INVALID_RATING", "Rating must be between 1 and 5")
        }
        other => {
            error!(error = %other, "Feedback submission failed");
            ApiResponse::internal_error()
        }
    }
}

/// Submit feedback
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = "feedback",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown owner"),
    )
)]
#[post("/api/feedback")]
pub async fn submit_feedback_handler(
    body: web::Json<SubmitFeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let input = SubmitFeedbackInput {
        owner_id: body.user_id,
        message: body.message,
        category: body.category,
        rating: body.rating,
        is_public: body.is_public,
    };

    match data.submit_feedback_use_case.execute(input).await {
        Ok(record) => ApiResponse::created(FeedbackResponse::from(record)),
        Err(err) => map_submit_error(err),
    }
}
