use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feedback::application::domain::entities::{
    FeedbackCategory, FeedbackRecord, FeedbackStatus, MAX_MESSAGE_LEN,
};
use crate::modules::feedback::application::ports::outgoing::FeedbackRepository;

#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub owner_id: Uuid,
    pub message: String,
    pub category: Option<String>,
    pub rating: Option<i16>,
    pub is_public: bool,
}

#[derive(Debug, Clone)]
pub enum SubmitFeedbackError {
    OwnerNotFound,
    EmptyMessage,
    MessageTooLong,
    InvalidCategory,
    InvalidRating,
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for SubmitFeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitFeedbackError::OwnerNotFound => write!(f, "Owner account not found"),
            SubmitFeedbackError::EmptyMessage => write!(f, "Message cannot be empty"),
            SubmitFeedbackError::MessageTooLong => {
                write!(f, "Message cannot exceed {} characters", MAX_MESSAGE_LEN)
            }
            SubmitFeedbackError::InvalidCategory => write!(f, "Unknown feedback category"),
            SubmitFeedbackError::InvalidRating => write!(f, "Rating must be between 1 and 5"),
            SubmitFeedbackError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            SubmitFeedbackError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for SubmitFeedbackError {}

#[async_trait]
pub trait ISubmitFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<FeedbackRecord, SubmitFeedbackError>;
}

pub struct SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    repository: R,
    account_query: Arc<dyn AccountQuery>,
}

impl<R> SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    pub fn new(repository: R, account_query: Arc<dyn AccountQuery>) -> Self {
        Self {
            repository,
            account_query,
        }
    }
}

#[async_trait]
impl<R> ISubmitFeedbackUseCase for SubmitFeedbackUseCase<R>
where
    R: FeedbackRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<FeedbackRecord, SubmitFeedbackError> {
        let message = input.message.trim().to_string();
        if message.is_empty() {
            return Err(SubmitFeedbackError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(SubmitFeedbackError::MessageTooLong);
        }

        let category = match input.category.as_deref() {
            None => FeedbackCategory::General,
            Some(raw) => {
                FeedbackCategory::parse(raw).ok_or(SubmitFeedbackError::InvalidCategory)?
            }
        };

        if let Some(rating) = input.rating {
            if !(1..=5).contains(&rating) {
                return Err(SubmitFeedbackError::InvalidRating);
            }
        }

        // Feedback always has an owner; unlike predictions there is no
        // anonymous path.
        self.account_query
            .find_by_id(input.owner_id)
            .await
            .map_err(|e| SubmitFeedbackError::QueryError(e.to_string()))?
            .ok_or(SubmitFeedbackError::OwnerNotFound)?;

        let record = FeedbackRecord {
            id: Uuid::new_v4(),
            user_id: input.owner_id,
            message,
            category,
            rating: input.rating,
            status: FeedbackStatus::Pending,
            admin_response: None,
            is_public: input.is_public,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        self.repository
            .submit(record)
            .await
            .map_err(|e| SubmitFeedbackError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Account;
    use crate::modules::auth::application::ports::outgoing::AccountQueryError;
    use crate::modules::feedback::application::ports::outgoing::FeedbackRepositoryError;

    struct MockAccountQuery {
        account: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(self.account.clone())
        }

        async fn find_by_email(&self, _e: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, _u: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }
    }

    struct MockFeedbackRepository;

    #[async_trait]
    impl FeedbackRepository for MockFeedbackRepository {
        async fn submit(
            &self,
            feedback: FeedbackRecord,
        ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
            Ok(feedback)
        }

        async fn moderate(
            &self,
            _feedback_id: Uuid,
            _status: FeedbackStatus,
            _admin_response: Option<String>,
        ) -> Result<FeedbackRecord, FeedbackRepositoryError> {
            unimplemented!()
        }
    }

    fn account() -> Account {
        Account {
            id: Uuid::new_v4(),
            username: "farmer1".to_string(),
            email: "f1@example.com".to_string(),
            password_hash: "hash".to_string(),
            location: None,
            farm_size: None,
            crops: vec![],
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn use_case(account: Option<Account>) -> SubmitFeedbackUseCase<MockFeedbackRepository> {
        SubmitFeedbackUseCase::new(
            MockFeedbackRepository,
            Arc::new(MockAccountQuery { account }),
        )
    }

    fn input(owner_id: Uuid) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            owner_id,
            message: "  The blight detection saved my tomato crop.  ".to_string(),
            category: None,
            rating: Some(5),
            is_public: true,
        }
    }

    #[tokio::test]
    async fn submission_trims_and_defaults_category() {
        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner));

        let record = uc.execute(input(owner_id)).await.unwrap();

        assert_eq!(record.message, "The blight detection saved my tomato crop.");
        assert_eq!(record.category, FeedbackCategory::General);
        assert_eq!(record.status, FeedbackStatus::Pending);
        assert_eq!(record.rating, Some(5));
        assert!(record.admin_response.is_none());
    }

    #[tokio::test]
    async fn unknown_owner_is_rejected() {
        let uc = use_case(None);

        assert!(matches!(
            uc.execute(input(Uuid::new_v4())).await,
            Err(SubmitFeedbackError::OwnerNotFound)
        ));
    }

    #[tokio::test]
    async fn whitespace_only_message_is_rejected() {
        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner));

        let mut bad = input(owner_id);
        bad.message = "   \n\t ".to_string();

        assert!(matches!(
            uc.execute(bad).await,
            Err(SubmitFeedbackError::EmptyMessage)
        ));
    }

    #[tokio::test]
    async fn overlong_message_is_rejected() {
        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner));

        let mut bad = input(owner_id);
        bad.message = "x".repeat(MAX_MESSAGE_LEN + 1);

        assert!(matches!(
            uc.execute(bad).await,
            Err(SubmitFeedbackError::MessageTooLong)
        ));
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner));

        for bad_rating in [0, 6, -1] {
            let mut bad = input(owner_id);
            bad.rating = Some(bad_rating);
            assert!(matches!(
                uc.execute(bad).await,
                Err(SubmitFeedbackError::InvalidRating)
            ));
        }
    }

    #[tokio::test]
    async fn unknown_category_is_rejected_but_known_one_is_parsed() {
        let owner = account();
        let owner_id = owner.id;
        let uc = use_case(Some(owner));

        let mut bad = input(owner_id);
        bad.category = Some("praise".to_string());
        assert!(matches!(
            uc.execute(bad).await,
            Err(SubmitFeedbackError::InvalidCategory)
        ));

        let mut good = input(owner_id);
        good.category = Some("Bug".to_string());
        let record = uc.execute(good).await.unwrap();
        assert_eq!(record.category, FeedbackCategory::Bug);
    }
}
