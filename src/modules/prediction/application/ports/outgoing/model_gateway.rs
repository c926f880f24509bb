use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Numeric soil and climate features the model service scores against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilFeatures {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    pub confidence: f64,
}

/// The model's primary pick plus its ranked runners-up.
#[derive(Debug, Clone, PartialEq)]
pub struct CropRecommendation {
    pub primary: CropScore,
    pub alternatives: Vec<CropScore>,
}

/// The model service is an unreliable remote dependency. `Unavailable`
/// covers timeouts and connection failures and must stay distinguishable
/// from a reachable service answering nonsense.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelGatewayError {
    #[error("Model service unavailable: {0}")]
    Unavailable(String),
    #[error("Model service returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn recommend_crop(
        &self,
        features: &SoilFeatures,
    ) -> Result<CropRecommendation, ModelGatewayError>;
}
