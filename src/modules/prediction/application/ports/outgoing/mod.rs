pub mod model_gateway;
pub mod prediction_query;
pub mod prediction_repository;

pub use model_gateway::{
    CropRecommendation, CropScore, ModelGateway, ModelGatewayError, SoilFeatures,
};
pub use prediction_query::{PredictionQuery, PredictionQueryError, SearchFilters};
pub use prediction_repository::{PredictionRepository, PredictionRepositoryError};
