pub mod list_own_predictions;
pub mod predict;
pub mod recommend_crops;
pub mod search_predictions;
pub mod verify_prediction;

pub use list_own_predictions::{list_own_predictions_handler, HistoryResponseBody};
pub use predict::{predict_handler, PredictRequest, PredictionResponse};
pub use recommend_crops::{recommend_crops_handler, RecommendRequest, RecommendResponseBody};
pub use search_predictions::{search_predictions_handler, SearchQueryParams};
pub use verify_prediction::{verify_prediction_handler, VerifyPredictionRequest};
