use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

// Auth
use crate::modules::auth::adapter::incoming::web::routes::{
    DeactivateAccountRequest, LoginResponseBody, ProfileResponse, RegisterResponseBody,
    RegisteredAccount, SessionAccount, UpdateProfileRequest,
};

// Crops
use crate::modules::prediction::adapter::incoming::web::routes::{
    HistoryResponseBody, PredictRequest, PredictionResponse, RecommendRequest,
    RecommendResponseBody, VerifyPredictionRequest,
};

// Feedback
use crate::modules::feedback::adapter::incoming::web::routes::{
    AdminFeedbackResponse, FeedbackResponse, ModerateFeedbackRequest, SubmitFeedbackRequest,
};

// Stats
use crate::modules::stats::adapter::incoming::web::routes::{
    DashboardResponseBody, DiseaseBucketDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AnnData Platform API",
        version = "1.0.0",
        description = "Accounts, crop-disease predictions, feedback and dashboard statistics \
                       for the AnnData agricultural platform",
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_account::register_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_account::login_account_handler,

        // User
        crate::modules::auth::adapter::incoming::web::routes::fetch_profile::fetch_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile::update_profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::deactivate_account::deactivate_account_handler,

        // Crops
        crate::modules::prediction::adapter::incoming::web::routes::predict::predict_handler,
        crate::modules::prediction::adapter::incoming::web::routes::recommend_crops::recommend_crops_handler,
        crate::modules::prediction::adapter::incoming::web::routes::list_own_predictions::list_own_predictions_handler,
        crate::modules::prediction::adapter::incoming::web::routes::search_predictions::search_predictions_handler,
        crate::modules::prediction::adapter::incoming::web::routes::verify_prediction::verify_prediction_handler,

        // Feedback
        crate::modules::feedback::adapter::incoming::web::routes::submit_feedback::submit_feedback_handler,
        crate::modules::feedback::adapter::incoming::web::routes::list_feedback::list_feedback_handler,
        crate::modules::feedback::adapter::incoming::web::routes::moderate_feedback::moderate_feedback_handler,

        // Stats
        crate::modules::stats::adapter::incoming::web::routes::dashboard::dashboard_handler,
    ),
    components(schemas(
        ErrorResponse,
        ErrorDetail,
        RegisterResponseBody,
        RegisteredAccount,
        LoginResponseBody,
        SessionAccount,
        ProfileResponse,
        UpdateProfileRequest,
        DeactivateAccountRequest,
        PredictRequest,
        PredictionResponse,
        crate::modules::prediction::adapter::incoming::web::routes::predict::SoilFeaturesDto,
        crate::modules::prediction::adapter::incoming::web::routes::predict::OutcomeDto,
        crate::modules::prediction::adapter::incoming::web::routes::predict::AlternativeDto,
        crate::modules::prediction::adapter::incoming::web::routes::predict::GeoPointDto,
        crate::modules::prediction::adapter::incoming::web::routes::predict::WeatherDto,
        HistoryResponseBody,
        VerifyPredictionRequest,
        RecommendRequest,
        RecommendResponseBody,
        crate::modules::prediction::adapter::incoming::web::routes::recommend_crops::ScoredCrop,
        SubmitFeedbackRequest,
        FeedbackResponse,
        AdminFeedbackResponse,
        ModerateFeedbackRequest,
        DashboardResponseBody,
        DiseaseBucketDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Profile management"),
        (name = "crops", description = "Predictions and recommendations"),
        (name = "feedback", description = "Feedback submission"),
        (name = "admin", description = "Moderation and verification"),
        (name = "stats", description = "Dashboard aggregation"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
