// application/ports/outgoing/feedback_query.rs
use crate::modules::feedback::application::domain::entities::{
    FeedbackCategory, FeedbackRecord, FeedbackStatus, FeedbackWithOwner,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct FeedbackFilters {
    pub status: Option<FeedbackStatus>,
    pub category: Option<FeedbackCategory>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FeedbackQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FeedbackQuery: Send + Sync {
    async fn find_by_id(
        &self,
        feedback_id: Uuid,
    ) -> Result<Option<FeedbackRecord>, FeedbackQueryError>;

    /// Newest-first filtered listing joined with owner identity, capped
    /// at `limit` rows.
    async fn list_with_owners(
        &self,
        filters: &FeedbackFilters,
        limit: u64,
    ) -> Result<Vec<FeedbackWithOwner>, FeedbackQueryError>;
}
