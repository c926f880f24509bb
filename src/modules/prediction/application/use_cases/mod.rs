pub mod fetch_prediction_history;
pub mod record_prediction;
pub mod recommend_crops;
pub mod search_predictions;
pub mod verify_prediction;
