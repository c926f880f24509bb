use crate::modules::prediction::application::use_cases::verify_prediction::VerifyPredictionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::predict::PredictionResponse;

#[derive(Deserialize, ToSchema)]
pub struct VerifyPredictionRequest {
    /// Name of the expert confirming the prediction
    #[schema(example = "dr.rao")]
    pub verifier: String,
}

/// Mark a prediction as expert-verified
///
/// Calling again replaces the verifier (last write wins).
#[utoipa::path(
    post,
    path = "/api/admin/predictions/{id}/verify",
    tag = "admin",
    request_body = VerifyPredictionRequest,
    responses(
        (status = 200, description = "Prediction verified", body = PredictionResponse),
        (status = 400, description = "Blank verifier"),
        (status = 404, description = "Unknown prediction"),
    )
)]
#[post("/api/admin/predictions/{id}/verify")]
pub async fn verify_prediction_handler(
    path: web::Path<Uuid>,
    body: web::Json<VerifyPredictionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .verify_prediction_use_case
        .execute(path.into_inner(), &body.verifier)
        .await
    {
        Ok(record) => ApiResponse::success(PredictionResponse::from(record)),
        Err(VerifyPredictionError::EmptyVerifier) => {
            ApiResponse::bad_request("EMPTY_VERIFIER", "Verifier name cannot be empty")
        }
        Err(VerifyPredictionError::PredictionNotFound) => {
            ApiResponse::not_found("PREDICTION_NOT_FOUND", "Prediction not found")
        }
        Err(err) => {
            error!(error = %err, "Prediction verification failed");
            ApiResponse::internal_error()
        }
    }
}
