use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::PublicProfile;
use crate::modules::auth::application::ports::outgoing::AccountQuery;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    AccountNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchProfileError::AccountNotFound => write!(f, "Account not found"),
            FetchProfileError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchProfileError {}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<PublicProfile, FetchProfileError>;
}

#[derive(Debug, Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<PublicProfile, FetchProfileError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::AccountNotFound)?;

        Ok(PublicProfile::from(account))
    }
}
