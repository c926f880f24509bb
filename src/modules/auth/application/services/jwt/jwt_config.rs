use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 needs a key with real entropy behind it
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        // Sessions are valid for a fixed 24 hours unless overridden
        let session_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .expect("Invalid JWT_ACCESS_EXPIRY value");

        if session_expiry <= 0 {
            panic!("JWT_ACCESS_EXPIRY must be positive");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "AnnData".to_string());

        Self {
            secret_key,
            issuer,
            session_expiry,
        }
    }
}
