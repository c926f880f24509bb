use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;

use super::jwt_config::JwtConfig;

/// Claims carried by a session token. Opaque to the client; everything a
/// downstream handler needs to act on behalf of the account is embedded,
/// so no database round-trip happens during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub username: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Wrong token type")]
    WrongTokenType,
    #[error("Token encoding failed: {0}")]
    EncodingError(String),
}

/// Stateless session issuer. Verification is a pure function of the token
/// and the configured secret; there is no revocation list, tokens die by
/// expiry alone.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("session_expiry", &self.config.session_expiry)
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a session token for an authenticated account.
    pub fn issue_session_token(&self, account: &Account) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.session_expiry);

        let claims = SessionClaims {
            sub: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            token_type: "access".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    /// Verify and decode a session token. Signature and expiry are both
    /// enforced; either failing rejects the token deterministically.
    pub fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(
            |e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token verification failed: bad signature");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::debug!("Token verification failed: malformed");
                        TokenError::MalformedToken
                    }
                }
            },
        )?;

        if decoded.claims.token_type != "access" {
            return Err(TokenError::WrongTokenType);
        }

        Ok(decoded.claims)
    }
}
