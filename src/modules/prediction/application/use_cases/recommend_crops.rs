use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::prediction::application::ports::outgoing::{
    CropRecommendation, ModelGateway, ModelGatewayError, SoilFeatures,
};

/// Straight pass-through to the model service: score soil features and
/// return the ranked crops without touching the ledger. Kept separate from
/// `record_prediction` so exploratory "what should I plant" queries leave
/// no trace.
#[async_trait]
pub trait IRecommendCropsUseCase: Send + Sync {
    async fn execute(
        &self,
        features: SoilFeatures,
    ) -> Result<CropRecommendation, ModelGatewayError>;
}

pub struct RecommendCropsUseCase {
    model_gateway: Arc<dyn ModelGateway>,
}

impl RecommendCropsUseCase {
    pub fn new(model_gateway: Arc<dyn ModelGateway>) -> Self {
        Self { model_gateway }
    }
}

#[async_trait]
impl IRecommendCropsUseCase for RecommendCropsUseCase {
    async fn execute(
        &self,
        features: SoilFeatures,
    ) -> Result<CropRecommendation, ModelGatewayError> {
        self.model_gateway.recommend_crop(&features).await
    }
}
