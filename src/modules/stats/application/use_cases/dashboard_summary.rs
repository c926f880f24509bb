use async_trait::async_trait;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::stats::application::ports::outgoing::{DiseaseBucket, StatsQuery};

pub const RECENT_PREDICTIONS_LIMIT: u64 = 5;
pub const DISTRIBUTION_LIMIT: u64 = 5;

/// Snapshot for the landing dashboard. Assembled from independent reads
/// with no transaction across them; a write landing mid-snapshot may show
/// up in one number and not another, which is acceptable for a dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub active_account_count: u64,
    pub prediction_count: u64,
    pub feedback_count: u64,
    pub recent_predictions: Vec<PredictionRecord>,
    pub disease_distribution: Vec<DiseaseBucket>,
}

#[derive(Debug, Clone)]
pub enum DashboardSummaryError {
    QueryError(String),
}

impl std::fmt::Display for DashboardSummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardSummaryError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardSummaryError {}

#[async_trait]
pub trait IDashboardSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardSummary, DashboardSummaryError>;
}

#[derive(Debug, Clone)]
pub struct DashboardSummaryUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> DashboardSummaryUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IDashboardSummaryUseCase for DashboardSummaryUseCase<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardSummary, DashboardSummaryError> {
        // Five independent reads, no ordering dependency between them.
        let (
            active_account_count,
            prediction_count,
            feedback_count,
            recent_predictions,
            disease_distribution,
        ) = futures::try_join!(
            self.query.active_account_count(),
            self.query.prediction_count(),
            self.query.feedback_count(),
            self.query.recent_predictions(RECENT_PREDICTIONS_LIMIT),
            self.query.disease_distribution(DISTRIBUTION_LIMIT),
        )
        .map_err(|e| DashboardSummaryError::QueryError(e.to_string()))?;

        Ok(DashboardSummary {
            active_account_count,
            prediction_count,
            feedback_count,
            recent_predictions,
            disease_distribution,
        })
    }
}
