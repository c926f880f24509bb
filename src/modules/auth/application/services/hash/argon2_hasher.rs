use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2, Params,
};
use rand_core::OsRng;

use super::password_hasher::PasswordHasher as HasherTrait;

#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    /// RFC 9106 recommended parameters, as shipped by the argon2 crate.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            salt_override: None,
        }
    }

    /// Lower memory cost for small deployments. Still argon2id, still salted.
    pub fn budget_vps() -> Self {
        let params = Params::new(19 * 1024, 2, 1, None).expect("valid argon2 params");
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
            salt_override: None,
        }
    }

    /// Minimal work factor so test suites stay fast. Never for production.
    pub fn fast_env() -> Self {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
            salt_override: None,
        }
    }

    // test-only
    pub fn with_salt(salt: SaltString) -> Self {
        Self {
            argon2: Argon2::default(),
            salt_override: Some(salt),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HasherTrait for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        let salt = match &self.salt_override {
            Some(s) => s.clone(),
            None => SaltString::generate(&mut OsRng),
        };
        match self.argon2.hash_password(password.as_bytes(), &salt) {
            Ok(password_hash) => Ok(password_hash.to_string()),
            Err(e) => Err(format!("Failed to hash password: {}", e)),
        }
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        match PasswordHash::new(hashed) {
            Ok(parsed_hash) => {
                // The argon2 crate compares digests in constant time.
                match self
                    .argon2
                    .verify_password(password.as_bytes(), &parsed_hash)
                {
                    Ok(_) => Ok(true),
                    Err(PasswordHashError::Password) => Ok(false),
                    Err(e) => Err(format!("Password verification failed: {}", e)),
                }
            }
            Err(_) => Err("Invalid hash format".to_string()),
        }
    }
}
