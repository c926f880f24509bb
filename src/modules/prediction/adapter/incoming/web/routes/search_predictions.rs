use crate::modules::prediction::application::domain::entities::CropType;
use crate::modules::prediction::application::ports::outgoing::SearchFilters;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::predict::PredictionResponse;

#[derive(Deserialize, IntoParams)]
pub struct SearchQueryParams {
    /// Case-insensitive substring match on the predicted label
    pub label: Option<String>,
    /// One of the fixed crop types; unknown values match nothing special
    /// and are folded to "other"
    pub crop_type: Option<String>,
    pub verified: Option<bool>,
}

/// Search recorded predictions
///
/// Filters combine with AND; results are newest-first and capped.
#[utoipa::path(
    get,
    path = "/api/predictions/search",
    tag = "crops",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Matching predictions", body = Vec<PredictionResponse>),
    )
)]
#[get("/api/predictions/search")]
pub async fn search_predictions_handler(
    params: web::Query<SearchQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();
    let filters = SearchFilters {
        label_substring: params.label,
        crop_type: params.crop_type.as_deref().map(CropType::from_label),
        verified: params.verified,
    };

    match data.search_predictions_use_case.execute(filters).await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(PredictionResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => {
            error!(error = %err, "Prediction search failed");
            ApiResponse::internal_error()
        }
    }
}
