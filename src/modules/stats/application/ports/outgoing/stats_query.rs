// application/ports/outgoing/stats_query.rs
use crate::modules::prediction::application::domain::entities::PredictionRecord;
use async_trait::async_trait;
use serde::Serialize;

/// One label's slice of the disease distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseBucket {
    pub label: String,
    pub count: i64,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only aggregation over the ledger and registries. Each method is an
/// independent snapshot; callers may run them concurrently.
#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn active_account_count(&self) -> Result<u64, StatsQueryError>;
    async fn prediction_count(&self) -> Result<u64, StatsQueryError>;
    async fn feedback_count(&self) -> Result<u64, StatsQueryError>;

    /// The `limit` newest predictions across all owners.
    async fn recent_predictions(
        &self,
        limit: u64,
    ) -> Result<Vec<PredictionRecord>, StatsQueryError>;

    /// Predictions grouped by label: count and mean confidence per label,
    /// most frequent first, truncated to `limit` buckets.
    async fn disease_distribution(
        &self,
        limit: u64,
    ) -> Result<Vec<DiseaseBucket>, StatsQueryError>;
}
