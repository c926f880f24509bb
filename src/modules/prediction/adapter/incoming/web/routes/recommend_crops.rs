use crate::modules::prediction::application::ports::outgoing::{
    ModelGatewayError, SoilFeatures,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// Soil and climate readings to score.
#[derive(Deserialize, ToSchema)]
pub struct RecommendRequest {
    #[serde(rename = "N")]
    #[schema(example = 90.0)]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    #[schema(example = 42.0)]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    #[schema(example = 43.0)]
    pub potassium: f64,
    #[schema(example = 21.0)]
    pub temperature: f64,
    #[schema(example = 82.0)]
    pub humidity: f64,
    #[schema(example = 6.5)]
    pub ph: f64,
    #[schema(example = 202.9)]
    pub rainfall: f64,
}

#[derive(Serialize, ToSchema)]
pub struct ScoredCrop {
    #[schema(example = "rice")]
    pub crop: String,
    #[schema(example = 0.87)]
    pub confidence: f64,
}

#[derive(Serialize, ToSchema)]
pub struct RecommendResponseBody {
    pub primary: ScoredCrop,
    pub alternatives: Vec<ScoredCrop>,
}

/// Recommend crops for the given soil profile
///
/// Consults the model service directly; nothing is recorded.
#[utoipa::path(
    post,
    path = "/api/crops/recommend",
    tag = "crops",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Ranked crop recommendations", body = RecommendResponseBody),
        (status = 503, description = "Model service unavailable"),
    )
)]
#[post("/api/crops/recommend")]
pub async fn recommend_crops_handler(
    body: web::Json<RecommendRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();
    let features = SoilFeatures {
        nitrogen: body.nitrogen,
        phosphorus: body.phosphorus,
        potassium: body.potassium,
        temperature: body.temperature,
        humidity: body.humidity,
        ph: body.ph,
        rainfall: body.rainfall,
    };

    match data.recommend_crops_use_case.execute(features).await {
        Ok(recommendation) => ApiResponse::success(RecommendResponseBody {
            primary: ScoredCrop {
                crop: recommendation.primary.crop,
                confidence: recommendation.primary.confidence,
            },
            alternatives: recommendation
                .alternatives
                .into_iter()
                .map(|score| ScoredCrop {
                    crop: score.crop,
                    confidence: score.confidence,
                })
                .collect(),
        }),
        Err(ModelGatewayError::Unavailable(detail)) => {
            warn!(%detail, "Model service unavailable");
            ApiResponse::service_unavailable(
                "MODEL_SERVICE_UNAVAILABLE",
                "The recommendation service is temporarily unavailable; please retry shortly",
            )
        }
        Err(err) => {
            error!(error = %err, "Crop recommendation failed");
            ApiResponse::internal_error()
        }
    }
}
