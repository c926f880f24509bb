use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::PublicProfile;
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, ProfileChanges,
};

/// Patch-style profile update: only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub email: Option<String>,
    pub location: Option<String>,
    pub farm_size: Option<f64>,
    pub crops: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    AccountNotFound,
    EmailAlreadyExists,
    InvalidEmailFormat,
    NegativeFarmSize,
    NoFieldsSupplied,
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileError::AccountNotFound => write!(f, "Account not found"),
            UpdateProfileError::EmailAlreadyExists => write!(f, "Email already exists"),
            UpdateProfileError::InvalidEmailFormat => write!(f, "Invalid email format"),
            UpdateProfileError::NegativeFarmSize => {
                write!(f, "Farm size must be a non-negative number")
            }
            UpdateProfileError::NoFieldsSupplied => write!(f, "No profile fields supplied"),
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            UpdateProfileError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<PublicProfile, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<PublicProfile, UpdateProfileError> {
        if let Some(size) = input.farm_size {
            if size < 0.0 || !size.is_finite() {
                return Err(UpdateProfileError::NegativeFarmSize);
            }
        }

        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| UpdateProfileError::QueryError(e.to_string()))?
            .ok_or(UpdateProfileError::AccountNotFound)?;

        let mut changes = ProfileChanges {
            email: None,
            location: input.location,
            farm_size: input.farm_size,
            crops: input.crops,
        };

        if let Some(raw_email) = input.email {
            let email = raw_email.trim().to_lowercase();
            if !EmailAddress::is_valid(&email) {
                return Err(UpdateProfileError::InvalidEmailFormat);
            }

            // Re-check uniqueness, but never against ourselves: submitting
            // the current address unchanged is not a conflict.
            if email != account.email {
                if let Some(holder) = self
                    .query
                    .find_by_email(&email)
                    .await
                    .map_err(|e| UpdateProfileError::QueryError(e.to_string()))?
                {
                    if holder.id != account_id {
                        return Err(UpdateProfileError::EmailAlreadyExists);
                    }
                }
                changes.email = Some(email);
            }
        }

        if changes.is_empty() {
            return Err(UpdateProfileError::NoFieldsSupplied);
        }

        let updated = self
            .repository
            .update_profile(account_id, changes)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => UpdateProfileError::AccountNotFound,
                AccountRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })?;

        Ok(PublicProfile::from(updated))
    }
}
