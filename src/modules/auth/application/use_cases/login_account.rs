use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::auth::application::services::{
    hash::PasswordHashingService, jwt::JwtService,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone, utoipa::ToSchema)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error =========================
/// Unknown email, deactivated account and wrong password all collapse to
/// `InvalidCredentials`: the caller must not be able to tell which one it
/// was, or the endpoint becomes an account-enumeration oracle.
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ========================= Login Response =========================
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountInfo,
}

// ========================= Use Case =========================
#[async_trait]
pub trait ILoginAccountUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    password_hasher: PasswordHashingService,
    jwt_service: JwtService,
}

impl<Q> LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q, password_hasher: PasswordHashingService, jwt_service: JwtService) -> Self {
        Self {
            query,
            password_hasher,
            jwt_service,
        }
    }
}

#[async_trait]
impl<Q> ILoginAccountUseCase for LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let account = match self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
        {
            Some(account) => account,
            None => {
                debug!("Login rejected: unknown email");
                return Err(LoginError::InvalidCredentials);
            }
        };

        if !account.is_active {
            debug!(account_id = %account.id, "Login rejected: deactivated account");
            return Err(LoginError::InvalidCredentials);
        }

        let is_valid = self
            .password_hasher
            .verify_password(request.password().to_string(), account.password_hash.clone())
            .await
            .map_err(LoginError::VerificationFailed)?;

        if !is_valid {
            debug!(account_id = %account.id, "Login rejected: password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .jwt_service
            .issue_session_token(&account)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            token,
            account: AccountInfo {
                id: account.id,
                username: account.username,
                email: account.email,
            },
        })
    }
}
