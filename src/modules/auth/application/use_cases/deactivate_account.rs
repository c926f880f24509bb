use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError,
};
use crate::modules::auth::application::services::hash::PasswordHashingService;

/// Soft deactivation is the only supported "delete". The caller's password
/// is re-verified even though the request already carries a valid session
/// token: a stolen token alone must not be enough to lock someone out of
/// their own account.
#[derive(Debug)]
pub enum DeactivateAccountError {
    InvalidCredentials,
    AccountNotFound,
    VerificationFailed(String),
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for DeactivateAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeactivateAccountError::InvalidCredentials => write!(f, "Invalid password"),
            DeactivateAccountError::AccountNotFound => write!(f, "Account not found"),
            DeactivateAccountError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            DeactivateAccountError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            DeactivateAccountError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for DeactivateAccountError {}

#[async_trait]
pub trait IDeactivateAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid, password: &str)
        -> Result<(), DeactivateAccountError>;
}

#[derive(Debug, Clone)]
pub struct DeactivateAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<Q, R> DeactivateAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: PasswordHashingService) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IDeactivateAccountUseCase for DeactivateAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        password: &str,
    ) -> Result<(), DeactivateAccountError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| DeactivateAccountError::QueryError(e.to_string()))?
            .ok_or(DeactivateAccountError::AccountNotFound)?;

        let is_valid = self
            .password_hasher
            .verify_password(password.to_string(), account.password_hash.clone())
            .await
            .map_err(DeactivateAccountError::VerificationFailed)?;

        if !is_valid {
            return Err(DeactivateAccountError::InvalidCredentials);
        }

        // Already-inactive accounts deactivate cleanly: the operation is
        // idempotent as long as the password still checks out.
        self.repository
            .deactivate_account(account_id)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => DeactivateAccountError::AccountNotFound,
                AccountRepositoryError::DatabaseError(msg) => {
                    DeactivateAccountError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Account;
    use crate::modules::auth::application::ports::outgoing::{
        AccountQueryError, ProfileChanges,
    };
    use crate::modules::auth::application::services::hash::PasswordHasher;
    use std::sync::atomic::{AtomicUsize, Ordering};

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

    #[derive(Default)]
    struct CountingRepository {
        deactivations: AtomicUsize,
    }

    #[async_trait]
    impl AccountRepository for CountingRepository {
        async fn create_account(
            &self,
            account: Account,
        ) -> Result<Account, AccountRepositoryError> {
            Ok(account)
        }

        async fn update_profile(
            &self,
            _account_id: Uuid,
            _changes: ProfileChanges,
        ) -> Result<Account, AccountRepositoryError> {
            unimplemented!()
        }

        async fn deactivate_account(
            &self,
            _account_id: Uuid,
        ) -> Result<(), AccountRepositoryError> {
            self.deactivations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MockPasswordHasher {
        matches: bool,
    }

    impl PasswordHasher for MockPasswordHasher {
        fn hash_password(&self, _password: &str) -> Result<String, String> {
            Ok("hashed".to_string())
        }

        fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
            Ok(self.matches)
        }
    }

    fn account(is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: "farmer1".to_string(),
            email: "f1@example.com".to_string(),
            password_hash: "stored_hash".to_string(),
            location: None,
            farm_size: None,
            crops: vec![],
            is_active,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn use_case(
        account: Option<Account>,
        password_matches: bool,
    ) -> DeactivateAccountUseCase<MockAccountQuery, CountingRepository> {
        DeactivateAccountUseCase::new(
            MockAccountQuery { account },
            CountingRepository::default(),
            PasswordHashingService::with_hasher(MockPasswordHasher {
                matches: password_matches,
            }),
        )
    }

    #[tokio::test]
    async fn correct_password_deactivates() {
        let uc = use_case(Some(account(true)), true);
        assert!(uc.execute(Uuid::new_v4(), "pw").await.is_ok());
        assert_eq!(uc.repository.deactivations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_and_nothing_changes() {
        let uc = use_case(Some(account(true)), false);
        assert!(matches!(
            uc.execute(Uuid::new_v4(), "nope").await,
            Err(DeactivateAccountError::InvalidCredentials)
        ));
        assert_eq!(uc.repository.deactivations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn deactivating_an_already_inactive_account_succeeds() {
        let uc = use_case(Some(account(false)), true);
        assert!(uc.execute(Uuid::new_v4(), "pw").await.is_ok());
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let uc = use_case(None, true);
        assert!(matches!(
            uc.execute(Uuid::new_v4(), "pw").await,
            Err(DeactivateAccountError::AccountNotFound)
        ));
    }
}
