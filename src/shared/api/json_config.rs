// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::warn;

/// Malformed or unparseable JSON bodies are rejected before any handler
/// runs, using the same envelope as domain validation failures.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req| {
        let message = err.to_string();
        warn!(path = %req.path(), %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
