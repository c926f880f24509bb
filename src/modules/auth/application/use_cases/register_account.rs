use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{AccountQuery, AccountRepository};
use crate::modules::auth::application::services::hash::PasswordHashingService;

// ========================= Register Request =========================
/// Validated registration input. Construction normalizes the username
/// (trimmed) and email (trimmed, lowercased) so every layer below works
/// on canonical values.
#[derive(Debug, Clone, utoipa::ToSchema)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyUsername,
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        username: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(RegisterRequestError::EmptyUsername);
        }

        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Validation happens during deserialization, before any domain logic runs.
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            username: String,
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(helper.username, helper.email, helper.password)
            .map_err(serde::de::Error::custom)
    }
}

// ========================= Use Case =========================
#[derive(Debug, Clone)]
pub enum RegisterAccountError {
    UsernameAlreadyExists,
    EmailAlreadyExists,
    HashingFailed(String),
    RepositoryError(String),
    QueryError(String),
}

impl std::fmt::Display for RegisterAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterAccountError::UsernameAlreadyExists => write!(f, "Username already exists"),
            RegisterAccountError::EmailAlreadyExists => write!(f, "Email already exists"),
            RegisterAccountError::HashingFailed(msg) => write!(f, "Hashing failed: {}", msg),
            RegisterAccountError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            RegisterAccountError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterAccountError {}

#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<Account, RegisterAccountError>;
}

#[derive(Debug, Clone)]
pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
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
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<Account, RegisterAccountError> {
        // Uniqueness holds across active AND deactivated accounts, so a
        // conflicting hit rejects regardless of its is_active flag.
        if self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| RegisterAccountError::QueryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterAccountError::UsernameAlreadyExists);
        }

        if self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterAccountError::QueryError(e.to_string()))?
            .is_some()
        {
            return Err(RegisterAccountError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password().to_string())
            .await
            .map_err(RegisterAccountError::HashingFailed)?;

        let account = Account {
            id: Uuid::new_v4(),
            username: request.username().to_string(),
            email: request.email().to_string(),
            password_hash,
            location: None,
            farm_size: None,
            crops: Vec::new(),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        self.repository
            .create_account(account)
            .await
            .map_err(|e| RegisterAccountError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::{
        AccountQueryError, AccountRepositoryError, ProfileChanges,
    };
    use crate::modules::auth::application::services::hash::PasswordHasher;

    #[derive(Default)]
    struct MockAccountQuery {
        existing_by_username: Option<Account>,
        existing_by_email: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .existing_by_username
                .clone()
                .filter(|a| a.username == username))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
            Ok(self.existing_by_email.clone().filter(|a| a.email == email))
        }
    }

    #[derive(Default)]
    struct MockAccountRepository {
        should_fail_on_create: bool,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn create_account(
            &self,
            account: Account,
        ) -> Result<Account, AccountRepositoryError> {
            if self.should_fail_on_create {
                return Err(AccountRepositoryError::DatabaseError(
                    "insert failed".to_string(),
                ));
            }
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
            unimplemented!()
        }
    }

    struct MockPasswordHasher;

    impl PasswordHasher for MockPasswordHasher {
        fn hash_password(&self, _password: &str) -> Result<String, String> {
            Ok("hashed_password".to_string())
        }

        fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
            Ok(true)
        }
    }

    fn existing_account(username: &str, email: &str, is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "existing_hash".to_string(),
            location: None,
            farm_size: None,
            crops: vec![],
            is_active,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn use_case(
        query: MockAccountQuery,
        repository: MockAccountRepository,
    ) -> RegisterAccountUseCase<MockAccountQuery, MockAccountRepository> {
        RegisterAccountUseCase::new(
            query,
            repository,
            PasswordHashingService::with_hasher(MockPasswordHasher),
        )
    }

    #[tokio::test]
    async fn register_normalizes_and_stores_only_the_hash() {
        let uc = use_case(MockAccountQuery::default(), MockAccountRepository::default());

        let request = RegisterRequest::new(
            "  farmer1 ".to_string(),
            "F1@Example.com".to_string(),
            "pw".to_string(),
        )
        .unwrap();

        let account = uc.execute(request).await.unwrap();

        assert_eq!(account.username, "farmer1");
        assert_eq!(account.email, "f1@example.com");
        assert_eq!(account.password_hash, "hashed_password");
        assert!(account.is_active);
        assert!(account.crops.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let query = MockAccountQuery {
            existing_by_email: Some(existing_account("farmer1", "f1@example.com", true)),
            ..Default::default()
        };
        let uc = use_case(query, MockAccountRepository::default());

        // Different casing on the wire; normalization makes it collide.
        let request = RegisterRequest::new(
            "farmer2".to_string(),
            "F1@EXAMPLE.COM".to_string(),
            "pw2".to_string(),
        )
        .unwrap();

        assert!(matches!(
            uc.execute(request).await,
            Err(RegisterAccountError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn deactivated_account_still_blocks_its_email() {
        let query = MockAccountQuery {
            existing_by_email: Some(existing_account("gone", "gone@example.com", false)),
            ..Default::default()
        };
        let uc = use_case(query, MockAccountRepository::default());

        let request = RegisterRequest::new(
            "newcomer".to_string(),
            "gone@example.com".to_string(),
            "pw".to_string(),
        )
        .unwrap();

        assert!(matches!(
            uc.execute(request).await,
            Err(RegisterAccountError::EmailAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let query = MockAccountQuery {
            existing_by_username: Some(existing_account("farmer1", "other@example.com", true)),
            ..Default::default()
        };
        let uc = use_case(query, MockAccountRepository::default());

        let request = RegisterRequest::new(
            "farmer1".to_string(),
            "f2@example.com".to_string(),
            "pw".to_string(),
        )
        .unwrap();

        assert!(matches!(
            uc.execute(request).await,
            Err(RegisterAccountError::UsernameAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn repository_failure_surfaces_as_repository_error() {
        let repository = MockAccountRepository {
            should_fail_on_create: true,
        };
        let uc = use_case(MockAccountQuery::default(), repository);

        let request = RegisterRequest::new(
            "farmer1".to_string(),
            "f1@example.com".to_string(),
            "pw".to_string(),
        )
        .unwrap();

        assert!(matches!(
            uc.execute(request).await,
            Err(RegisterAccountError::RepositoryError(_))
        ));
    }

    #[test]
    fn blank_fields_fail_request_validation() {
        assert!(matches!(
            RegisterRequest::new("  ".into(), "f1@example.com".into(), "pw".into()),
            Err(RegisterRequestError::EmptyUsername)
        ));
        assert!(matches!(
            RegisterRequest::new("farmer1".into(), "".into(), "pw".into()),
            Err(RegisterRequestError::EmptyEmail)
        ));
        assert!(matches!(
            RegisterRequest::new("farmer1".into(), "not-an-email".into(), "pw".into()),
            Err(RegisterRequestError::InvalidEmailFormat)
        ));
        assert!(matches!(
            RegisterRequest::new("farmer1".into(), "f1@example.com".into(), " ".into()),
            Err(RegisterRequestError::EmptyPassword)
        ));
    }
}
