use crate::modules::prediction::application::domain::entities::PredictionRecord;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[async_trait]
pub trait PredictionRepository {
    async fn record(
        &self,
        prediction: PredictionRecord,
    ) -> Result<PredictionRecord, PredictionRepositoryError>;

    /// Marks a record as verified and stamps the verifier. Repeated calls
    /// overwrite the verifier (last write wins).
    async fn set_verified(
        &self,
        prediction_id: Uuid,
        verifier: &str,
    ) -> Result<PredictionRecord, PredictionRepositoryError>;
}

#[derive(Debug)]
pub enum PredictionRepositoryError {
    PredictionNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for PredictionRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionRepositoryError::PredictionNotFound => write!(f, "Prediction not found"),
            PredictionRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
