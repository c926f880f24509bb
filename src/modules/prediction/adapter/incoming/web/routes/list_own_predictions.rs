use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::prediction::application::use_cases::fetch_prediction_history::{
    FetchHistoryError, DEFAULT_PAGE_SIZE,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::predict::PredictionResponse;

#[derive(Deserialize, IntoParams)]
pub struct HistoryQueryParams {
    /// 1-indexed page number
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct HistoryResponseBody {
    pub predictions: Vec<PredictionResponse>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Paginated prediction history of the calling account, newest first
#[utoipa::path(
    get,
    path = "/api/user/predictions",
    tag = "crops",
    params(HistoryQueryParams),
    responses(
        (status = 200, description = "One page of history", body = HistoryResponseBody),
        (status = 400, description = "Invalid page or page size"),
    ),
    security(("bearer_token" = []))
)]
#[get("/api/user/predictions")]
pub async fn list_own_predictions_handler(
    account: AuthenticatedAccount,
    params: web::Query<HistoryQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    match data
        .fetch_history_use_case
        .execute(account.account_id, page, page_size)
        .await
    {
        Ok(history) => ApiResponse::success(HistoryResponseBody {
            predictions: history
                .records
                .into_iter()
                .map(PredictionResponse::from)
                .collect(),
            total_count: history.total_count,
            page: history.page,
            page_size: history.page_size,
            total_pages: history.total_pages,
            has_next: history.has_next,
            has_previous: history.has_previous,
        }),
        Err(FetchHistoryError::InvalidPage) => {
            ApiResponse::bad_request("INVALID_PAGE", "Page must be at least 1")
        }
        Err(FetchHistoryError::InvalidPageSize) => {
            ApiResponse::bad_request("INVALID_PAGE_SIZE", "Page size out of range")
        }
        Err(err) => {
            error!(error = %err, "History fetch failed");
            ApiResponse::internal_error()
        }
    }
}
