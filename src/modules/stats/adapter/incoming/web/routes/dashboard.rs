use crate::modules::prediction::adapter::incoming::web::routes::PredictionResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DiseaseBucketDto {
    #[schema(example = "Late Blight")]
    pub label: String,
    #[schema(example = 42)]
    pub count: i64,
    #[schema(example = 0.85)]
    pub avg_confidence: f64,
}

#[derive(Serialize, ToSchema)]
pub struct DashboardResponseBody {
    pub active_account_count: u64,
    pub prediction_count: u64,
    pub feedback_count: u64,
    pub recent_predictions: Vec<PredictionResponse>,
    /// Top labels by record count, with mean confidence
    pub disease_distribution: Vec<DiseaseBucketDto>,
}

/// Dashboard aggregation snapshot
///
/// Eventually-consistent: the numbers come from independent reads with no
/// transaction spanning them.
#[utoipa::path(
    get,
    path = "/api/stats/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Snapshot", body = DashboardResponseBody),
    )
)]
#[get("/api/stats/dashboard")]
pub async fn dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    match data.dashboard_summary_use_case.execute().await {
        Ok(summary) => ApiResponse::success(DashboardResponseBody {
            active_account_count: summary.active_account_count,
            prediction_count: summary.prediction_count,
            feedback_count: summary.feedback_count,
            recent_predictions: summary
                .recent_predictions
                .into_iter()
                .map(PredictionResponse::from)
                .collect(),
            disease_distribution: summary
                .disease_distribution
                .into_iter()
                .map(|bucket| DiseaseBucketDto {
                    label: bucket.label,
                    count: bucket.count,
                    avg_confidence: bucket.avg_confidence,
                })
                .collect(),
        }),
        Err(err) => {
            error!(error = %err, "Dashboard snapshot failed");
            ApiResponse::internal_error()
        }
    }
}
