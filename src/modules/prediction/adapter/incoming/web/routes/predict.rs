use crate::modules::auth::adapter::incoming::web::extractors::auth::MaybeAuthenticated;
use crate::modules::prediction::application::domain::entities::{
    AlternativePrediction, GeoPoint, PredictionRecord, WeatherSnapshot,
};
use crate::modules::prediction::application::ports::outgoing::SoilFeatures;
use crate::modules::prediction::application::use_cases::record_prediction::{
    PresetOutcome, RecordPredictionError, RecordPredictionInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

/// A prediction submission. The image itself lives in external storage;
/// the body carries its reference. Exactly one of `soil_features` (the
/// model service is consulted) or `outcome` (a precomputed result is
/// archived as-is) must be present.
#[derive(Deserialize, ToSchema)]
pub struct PredictRequest {
    #[schema(example = "uploads/2025/leaf-0042.jpg")]
    pub image_ref: String,
    #[schema(example = "leaf.jpg")]
    pub original_filename: String,
    #[schema(example = "vegetable")]
    pub crop_type: Option<String>,
    pub soil_features: Option<SoilFeaturesDto>,
    pub outcome: Option<OutcomeDto>,
    pub location: Option<GeoPointDto>,
    pub weather: Option<WeatherDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct SoilFeaturesDto {
    #[serde(rename = "N")]
    pub nitrogen: f64,
    #[serde(rename = "P")]
    pub phosphorus: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct OutcomeDto {
    #[schema(example = "Late Blight")]
    pub label: String,
    #[schema(example = 0.93)]
    pub confidence: f64,
    #[serde(default)]
    pub alternatives: Vec<AlternativeDto>,
    pub treatments: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlternativeDto {
    pub label: String,
    pub confidence: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct GeoPointDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, ToSchema)]
pub struct WeatherDto {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub conditions: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PredictionResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub image_ref: String,
    pub original_filename: String,
    #[schema(example = "Late Blight")]
    pub predicted_label: String,
    #[schema(example = 0.93)]
    pub confidence: f64,
    pub alternatives: Vec<AlternativeDto>,
    #[schema(example = "vegetable")]
    pub crop_type: String,
    pub treatments: Option<Vec<String>>,
    pub is_verified: bool,
    pub verified_by: Option<String>,
    pub created_at: String,
}

impl From<PredictionRecord> for PredictionResponse {
    fn from(record: PredictionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id.map(|id| id.to_string()),
            image_ref: record.image_ref,
            original_filename: record.original_filename,
            predicted_label: record.predicted_label,
            confidence: record.confidence,
            alternatives: record
                .alternatives
                .into_iter()
                .map(|alt| AlternativeDto {
                    label: alt.label,
                    confidence: alt.confidence,
                })
                .collect(),
            crop_type: record.crop_type.as_str().to_string(),
            treatments: record.treatments,
            is_verified: record.is_verified,
            verified_by: record.verified_by,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

fn map_record_error(err: RecordPredictionError) -> HttpResponse {
    match &err {
        RecordPredictionError::InvalidImage => {
            ApiResponse::bad_request("INVALID_IMAGE", "Invalid or missing image reference")
        }
        RecordPredictionError::MissingPredictionSource => ApiResponse::bad_request(
            "MISSING_PREDICTION_SOURCE",
            "Either soil features or a precomputed outcome is required",
        ),
        RecordPredictionError::InvalidConfidence => {
            ApiResponse::bad_request("INVALID_CONFIDENCE", "Confidence must be within [0, 1]")
        }
        RecordPredictionError::OwnerNotFound => {
            ApiResponse::not_found("OWNER_NOT_FOUND", "Owner account not found")
        }
        RecordPredictionError::ModelServiceUnavailable(msg) => {
            warn!(detail = %msg, "Model service unavailable");
            ApiResponse::service_unavailable(
                "MODEL_SERVICE_UNAVAILABLE",
                "The prediction service is temporarily unavailable; please retry shortly or \
                 submit a precomputed outcome",
            )
        }
        other => {
            error!(error = %other, "Prediction recording failed");
            ApiResponse::internal_error()
        }
    }
}

/// Submit an image for disease prediction
///
/// Anonymous submissions are allowed; with a bearer token the record is
/// attached to the calling account.
#[utoipa::path(
    post,
    path = "/api/crops/predict",
    tag = "crops",
    request_body = PredictRequest,
    responses(
        (status = 201, description = "Prediction recorded", body = PredictionResponse),
        (status = 400, description = "Invalid image or confidence"),
        (status = 503, description = "Model service unavailable"),
    )
)]
#[post("/api/crops/predict")]
pub async fn predict_handler(
    identity: MaybeAuthenticated,
    body: web::Json<PredictRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let body = body.into_inner();

    let input = RecordPredictionInput {
        owner_id: identity.0.map(|account| account.account_id),
        image_ref: body.image_ref,
        original_filename: body.original_filename,
        crop_type: body.crop_type,
        soil_features: body.soil_features.map(|f| SoilFeatures {
            nitrogen: f.nitrogen,
            phosphorus: f.phosphorus,
            potassium: f.potassium,
            temperature: f.temperature,
            humidity: f.humidity,
            ph: f.ph,
            rainfall: f.rainfall,
        }),
        preset: body.outcome.map(|outcome| PresetOutcome {
            label: outcome.label,
            confidence: outcome.confidence,
            alternatives: outcome
                .alternatives
                .into_iter()
                .map(|alt| AlternativePrediction {
                    label: alt.label,
                    confidence: alt.confidence,
                })
                .collect(),
            treatments: outcome.treatments,
        }),
        location: body.location.map(|point| GeoPoint {
            latitude: point.latitude,
            longitude: point.longitude,
        }),
        weather: body.weather.map(|weather| WeatherSnapshot {
            temperature_c: weather.temperature_c,
            humidity_pct: weather.humidity_pct,
            conditions: weather.conditions,
        }),
    };

    match data.record_prediction_use_case.execute(input).await {
        Ok(record) => ApiResponse::created(PredictionResponse::from(record)),
        Err(err) => map_record_error(err),
    }
}
