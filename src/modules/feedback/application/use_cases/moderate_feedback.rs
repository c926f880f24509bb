use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::feedback::application::domain::entities::{
    FeedbackRecord, FeedbackStatus, MAX_MESSAGE_LEN,
};
use crate::modules::feedback::application::ports::outgoing::{
    FeedbackQuery, FeedbackRepository, FeedbackRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ModerateFeedbackError {
    FeedbackNotFound,
    InvalidStatus,
    /// The workflow only moves forward: pending → reviewed → resolved →
    /// closed (skipping ahead is fine, going back is not).
    BackwardTransition {
        from: FeedbackStatus,
        to: FeedbackStatus,
    },
    ResponseTooLong,
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for ModerateFeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerateFeedbackError::FeedbackNotFound => write!(f, "Feedback not found"),
            ModerateFeedbackError::InvalidStatus => write!(f, "Unknown feedback status"),
            ModerateFeedbackError::BackwardTransition { from, to } => write!(
                f,
                "Cannot move feedback from {} back to {}",
                from.as_str(),
                to.as_str()
            ),
            ModerateFeedbackError::ResponseTooLong => {
                write!(f, "Response cannot exceed {} characters", MAX_MESSAGE_LEN)
            }
            ModerateFeedbackError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            ModerateFeedbackError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ModerateFeedbackError {}

#[async_trait]
pub trait IModerateFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        feedback_id: Uuid,
        status: &str,
        admin_response: Option<String>,
    ) -> Result<FeedbackRecord, ModerateFeedbackError>;
}

pub struct ModerateFeedbackUseCase<Q, R>
where
    Q: FeedbackQuery + Send + Sync,
    R: FeedbackRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ModerateFeedbackUseCase<Q, R>
where
    Q: FeedbackQuery + Send + Sync,
    R: FeedbackRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IModerateFeedbackUseCase for ModerateFeedbackUseCase<Q, R>
where
    Q: FeedbackQuery + Send + Sync,
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(
        &self,
        feedback_id: Uuid,
        status: &str,
        admin_response: Option<String>,
    ) -> Result<FeedbackRecord, ModerateFeedbackError> {
        let next_status =
            FeedbackStatus::parse(status).ok_or(ModerateFeedbackError::InvalidStatus)?;

        let admin_response = match admin_response {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.chars().count() > MAX_MESSAGE_LEN {
                    return Err(ModerateFeedbackError::ResponseTooLong);
                }
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            }
            None => None,
        };

        let existing = self
            .query
            .find_by_id(feedback_id)
            .await
            .map_err(|e| ModerateFeedbackError::QueryError(e.to_string()))?
            .ok_or(ModerateFeedbackError::FeedbackNotFound)?;

        if !existing.status.can_transition_to(next_status) {
            return Err(ModerateFeedbackError::BackwardTransition {
                from: existing.status,
                to: next_status,
            });
        }

        self.repository
            .moderate(feedback_id, next_status, admin_response)
            .await
            .map_err(|e| match e {
                FeedbackRepositoryError::FeedbackNotFound => {
                    ModerateFeedbackError::FeedbackNotFound
                }
                FeedbackRepositoryError::DatabaseError(msg) => {
                    ModerateFeedbackError::RepositoryError(msg)
                }
            })
    }
}
