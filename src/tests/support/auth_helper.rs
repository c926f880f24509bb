use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtService};

pub fn test_jwt_service() -> Arc<JwtService> {
    Arc::new(JwtService::new(JwtConfig {
        secret_key: "a-test-secret-key-of-sufficient-length!!".to_string(),
        issuer: "AnnData".to_string(),
        session_expiry: 86400,
    }))
}

/// A fresh account id plus a session token for it, signed with the test
/// secret.
pub fn test_token() -> (Uuid, String) {
    let account = Account {
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
    };

    let token = test_jwt_service()
        .issue_session_token(&account)
        .expect("test token issuance");

    (account.id, token)
}
