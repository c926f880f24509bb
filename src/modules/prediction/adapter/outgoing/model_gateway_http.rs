use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, warn};

use crate::modules::prediction::application::ports::outgoing::{
    CropRecommendation, CropScore, ModelGateway, ModelGatewayError, SoilFeatures,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the out-of-process model service. Every call carries a
/// bounded timeout; a slow or dead service yields `Unavailable`, never a
/// hung request. No automatic retry.
#[derive(Debug, Clone)]
pub struct HttpModelGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Wire format of the model service ({success, data, error} envelope).
#[derive(Debug, Deserialize)]
struct GatewayEnvelope {
    success: bool,
    data: Option<GatewayRecommendation>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GatewayRecommendation {
    primary_recommendation: String,
    all_recommendations: Vec<GatewayScore>,
}

#[derive(Debug, Deserialize)]
struct GatewayScore {
    crop: String,
    confidence: f64,
}

impl HttpModelGateway {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("MODEL_SERVICE_URL").expect("MODEL_SERVICE_URL is not set in .env file");
        let timeout_secs = std::env::var("MODEL_SERVICE_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    fn map_envelope(envelope: GatewayEnvelope) -> Result<CropRecommendation, ModelGatewayError> {
        if !envelope.success {
            return Err(ModelGatewayError::InvalidResponse(
                envelope
                    .error
                    .unwrap_or_else(|| "service reported failure without detail".to_string()),
            ));
        }

        let data = envelope.data.ok_or_else(|| {
            ModelGatewayError::InvalidResponse("missing data in successful response".to_string())
        })?;

        let mut scores = data.all_recommendations;
        if scores.is_empty() {
            return Err(ModelGatewayError::InvalidResponse(
                "empty recommendation list".to_string(),
            ));
        }

        // The primary label should lead the ranked list; trust the label
        // field and pull its score out of the list.
        let primary_index = scores
            .iter()
            .position(|score| score.crop == data.primary_recommendation)
            .unwrap_or(0);
        let primary = scores.remove(primary_index);

        Ok(CropRecommendation {
            primary: CropScore {
                crop: primary.crop,
                confidence: primary.confidence,
            },
            alternatives: scores
                .into_iter()
                .map(|score| CropScore {
                    crop: score.crop,
                    confidence: score.confidence,
                })
                .collect(),
        })
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    async fn recommend_crop(
        &self,
        features: &SoilFeatures,
    ) -> Result<CropRecommendation, ModelGatewayError> {
        let url = format!("{}/api/ml/crop-recommendation", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(features)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Model service call timed out");
                    ModelGatewayError::Unavailable("request timed out".to_string())
                } else if e.is_connect() {
                    warn!("Model service unreachable");
                    ModelGatewayError::Unavailable("connection failed".to_string())
                } else {
                    error!(error = %e, "Model service call failed");
                    ModelGatewayError::Unavailable(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Model service returned an error status");
            return Err(ModelGatewayError::Unavailable(format!(
                "service responded with status {}",
                response.status()
            )));
        }

        let envelope: GatewayEnvelope = response
            .json()
            .await
            .map_err(|e| ModelGatewayError::InvalidResponse(e.to_string()))?;

        Self::map_envelope(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_from(raw: &str) -> GatewayEnvelope {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn successful_envelope_maps_primary_and_alternatives() {
        let envelope = envelope_from(
            r#"{
                "success": true,
                "data": {
                    "primary_recommendation": "rice",
                    "all_recommendations": [
                        {"crop": "rice", "confidence": 0.87},
                        {"crop": "maize", "confidence": 0.09},
                        {"crop": "jute", "confidence": 0.04}
                    ]
                },
                "timestamp": "2025-03-10T09:15:02Z"
            }"#,
        );

        let recommendation = HttpModelGateway::map_envelope(envelope).unwrap();

        assert_eq!(recommendation.primary.crop, "rice");
        assert_eq!(recommendation.primary.confidence, 0.87);
        assert_eq!(recommendation.alternatives.len(), 2);
        assert_eq!(recommendation.alternatives[0].crop, "maize");
    }

    #[test]
    fn reported_failure_is_invalid_response() {
        let envelope = envelope_from(
            r#"{"success": false, "error": "Crop recommendation model not loaded"}"#,
        );

        let result = HttpModelGateway::map_envelope(envelope);
        match result.unwrap_err() {
            ModelGatewayError::InvalidResponse(msg) => {
                assert!(msg.contains("model not loaded"));
            }
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn empty_recommendation_list_is_invalid() {
        let envelope = envelope_from(
            r#"{
                "success": true,
                "data": {"primary_recommendation": "rice", "all_recommendations": []}
            }"#,
        );

        assert!(matches!(
            HttpModelGateway::map_envelope(envelope),
            Err(ModelGatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let gateway = HttpModelGateway::new(
            "http://localhost:5000/".to_string(),
            Duration::from_secs(10),
        );
        assert_eq!(gateway.base_url, "http://localhost:5000");
    }
}
