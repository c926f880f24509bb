// application/ports/outgoing/account_query.rs
use crate::modules::auth::application::domain::entities::Account;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the account registry. Lookups by email expect the caller
/// to pass the normalized (trimmed, lowercased) form; all stored emails
/// are normalized at registration time.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError>;
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Account>, AccountQueryError>;
}
