use async_trait::async_trait;

use crate::modules::feedback::application::domain::entities::FeedbackWithOwner;
use crate::modules::feedback::application::ports::outgoing::{FeedbackFilters, FeedbackQuery};

/// Moderation listings are bounded; the screen never needs more than one
/// batch at a time.
pub const ADMIN_LIST_CAP: u64 = 50;

#[derive(Debug, Clone)]
pub enum ListFeedbackError {
    QueryError(String),
}

impl std::fmt::Display for ListFeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFeedbackError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListFeedbackError {}

#[async_trait]
pub trait IListFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        filters: FeedbackFilters,
    ) -> Result<Vec<FeedbackWithOwner>, ListFeedbackError>;
}

#[derive(Debug, Clone)]
pub struct ListFeedbackUseCase<Q>
where
    Q: FeedbackQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListFeedbackUseCase<Q>
where
    Q: FeedbackQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListFeedbackUseCase for ListFeedbackUseCase<Q>
where
    Q: FeedbackQuery + Send + Sync,
{
    async fn execute(
        &self,
        filters: FeedbackFilters,
    ) -> Result<Vec<FeedbackWithOwner>, ListFeedbackError> {
        self.query
            .list_with_owners(&filters, ADMIN_LIST_CAP)
            .await
            .map_err(|e| ListFeedbackError::QueryError(e.to_string()))
    }
}
