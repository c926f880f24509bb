use crate::modules::auth::application::domain::entities::Account;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Patch-style profile mutation. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub email: Option<String>,
    pub location: Option<String>,
    pub farm_size: Option<f64>,
    pub crops: Option<Vec<String>>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.location.is_none()
            && self.farm_size.is_none()
            && self.crops.is_none()
    }
}

#[async_trait]
pub trait AccountRepository {
    async fn create_account(&self, account: Account) -> Result<Account, AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, AccountRepositoryError>;

    /// Flips `is_active` to false. Succeeds when the account is already
    /// inactive; deactivation is the only supported "delete".
    async fn deactivate_account(&self, account_id: Uuid) -> Result<(), AccountRepositoryError>;
}

#[derive(Debug)]
pub enum AccountRepositoryError {
    AccountNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for AccountRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRepositoryError::AccountNotFound => write!(f, "Account not found"),
            AccountRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
