// application/ports/outgoing/prediction_query.rs
use crate::modules::prediction::application::domain::entities::{CropType, PredictionRecord};
use async_trait::async_trait;
use uuid::Uuid;

/// Search filters combine with logical AND. The label filter matches as a
/// case-insensitive substring.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub label_substring: Option<String>,
    pub crop_type: Option<CropType>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PredictionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PredictionQuery: Send + Sync {
    async fn find_by_id(
        &self,
        prediction_id: Uuid,
    ) -> Result<Option<PredictionRecord>, PredictionQueryError>;

    /// Newest-first page of an owner's history plus the total row count.
    /// `page` is 1-indexed.
    async fn list_for_owner(
        &self,
        owner_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<PredictionRecord>, u64), PredictionQueryError>;

    /// Newest-first filtered search, capped at `limit` rows.
    async fn search(
        &self,
        filters: &SearchFilters,
        limit: u64,
    ) -> Result<Vec<PredictionRecord>, PredictionQueryError>;
}
