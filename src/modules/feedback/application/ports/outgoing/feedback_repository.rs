use crate::modules::feedback::application::domain::entities::{FeedbackRecord, FeedbackStatus};
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[async_trait]
pub trait FeedbackRepository {
    async fn submit(
        &self,
        feedback: FeedbackRecord,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError>;

    async fn moderate(
        &self,
        feedback_id: Uuid,
        status: FeedbackStatus,
        admin_response: Option<String>,
    ) -> Result<FeedbackRecord, FeedbackRepositoryError>;
}

#[derive(Debug)]
pub enum FeedbackRepositoryError {
    FeedbackNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for FeedbackRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackRepositoryError::FeedbackNotFound => write!(f, "Feedback not found"),
            FeedbackRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
