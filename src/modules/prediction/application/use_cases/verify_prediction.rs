use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::prediction::application::ports::outgoing::{
    PredictionQuery, PredictionRepository, PredictionRepositoryError,
};

#[derive(Debug, Clone)]
pub enum VerifyPredictionError {
    EmptyVerifier,
    PredictionNotFound,
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for VerifyPredictionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyPredictionError::EmptyVerifier => write!(f, "Verifier name cannot be empty"),
            VerifyPredictionError::PredictionNotFound => write!(f, "Prediction not found"),
            VerifyPredictionError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            VerifyPredictionError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for VerifyPredictionError {}

#[async_trait]
pub trait IVerifyPredictionUseCase: Send + Sync {
    async fn execute(
        &self,
        prediction_id: Uuid,
        verifier: &str,
    ) -> Result<PredictionRecord, VerifyPredictionError>;
}

/// Marks a ledger entry as expert-verified. Re-verification overwrites the
/// verifier (last write wins); the displaced name is logged so the
/// overwrite leaves a trace.
pub struct VerifyPredictionUseCase<Q, R>
where
    Q: PredictionQuery + Send + Sync,
    R: PredictionRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> VerifyPredictionUseCase<Q, R>
where
    Q: PredictionQuery + Send + Sync,
    R: PredictionRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IVerifyPredictionUseCase for VerifyPredictionUseCase<Q, R>
where
    Q: PredictionQuery + Send + Sync,
    R: PredictionRepository + Send + Sync,
{
    async fn execute(
        &self,
        prediction_id: Uuid,
        verifier: &str,
    ) -> Result<PredictionRecord, VerifyPredictionError> {
        let verifier = verifier.trim();
        if verifier.is_empty() {
            return Err(VerifyPredictionError::EmptyVerifier);
        }

        let existing = self
            .query
            .find_by_id(prediction_id)
            .await
            .map_err(|e| VerifyPredictionError::QueryError(e.to_string()))?
            .ok_or(VerifyPredictionError::PredictionNotFound)?;

        if let Some(previous) = existing.verified_by.as_deref() {
            if previous != verifier {
                warn!(
                    %prediction_id,
                    displaced = previous,
                    verifier,
                    "Re-verification overwrites a previous verifier"
                );
            }
        }

        self.repository
            .set_verified(prediction_id, verifier)
            .await
            .map_err(|e| match e {
                PredictionRepositoryError::PredictionNotFound => {
                    VerifyPredictionError::PredictionNotFound
                }
                PredictionRepositoryError::DatabaseError(msg) => {
                    VerifyPredictionError::RepositoryError(msg)
                }
            })
    }
}
