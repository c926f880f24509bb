use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered farmer identity.
///
/// Deliberately NOT `Serialize`: the password hash must never travel past
/// the application layer. Read paths go through `PublicProfile` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub location: Option<String>,
    pub farm_size: Option<f64>,
    pub crops: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account projection safe to hand to the transport layer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PublicProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub location: Option<String>,
    pub farm_size: Option<f64>,
    pub crops: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for PublicProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            location: account.location,
            farm_size: account.farm_size,
            crops: account.crops,
            is_active: account.is_active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
