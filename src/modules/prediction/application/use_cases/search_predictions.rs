use async_trait::async_trait;

use crate::modules::prediction::application::domain::entities::PredictionRecord;
use crate::modules::prediction::application::ports::outgoing::{PredictionQuery, SearchFilters};

/// Hard cap on search results: the endpoint is open to anonymous callers
/// and must never become an unbounded table scan.
pub const SEARCH_RESULT_CAP: u64 = 20;

#[derive(Debug, Clone)]
pub enum SearchPredictionsError {
    QueryError(String),
}

impl std::fmt::Display for SearchPredictionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPredictionsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for SearchPredictionsError {}

#[async_trait]
pub trait ISearchPredictionsUseCase: Send + Sync {
    async fn execute(
        &self,
        filters: SearchFilters,
    ) -> Result<Vec<PredictionRecord>, SearchPredictionsError>;
}

#[derive(Debug, Clone)]
pub struct SearchPredictionsUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchPredictionsUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISearchPredictionsUseCase for SearchPredictionsUseCase<Q>
where
    Q: PredictionQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut filters: SearchFilters,
    ) -> Result<Vec<PredictionRecord>, SearchPredictionsError> {
        // Blank label filters mean "no label filter", not "match empty".
        if let Some(label) = &filters.label_substring {
            let trimmed = label.trim();
            filters.label_substring = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }

        self.query
            .search(&filters, SEARCH_RESULT_CAP)
            .await
            .map_err(|e| SearchPredictionsError::QueryError(e.to_string()))
    }
}
