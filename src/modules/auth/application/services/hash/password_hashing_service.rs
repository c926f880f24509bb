use std::sync::Arc;

use super::password_hasher::PasswordHasher;

/// Async front for the CPU-bound hasher. Argon2 at production parameters
/// takes tens of milliseconds, so both operations run on the blocking
/// thread pool instead of stalling the actix workers.
#[derive(Clone)]
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher>,
}

impl std::fmt::Debug for PasswordHashingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHashingService").finish()
    }
}

impl PasswordHashingService {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }

    pub fn with_hasher<H: PasswordHasher + 'static>(hasher: H) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| format!("Hashing task failed: {}", e))?
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| format!("Verification task failed: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::services::hash::Argon2Hasher;

    #[tokio::test]
    async fn service_round_trip() {
        let service = PasswordHashingService::with_hasher(Argon2Hasher::fast_env());

        let hash = service.hash_password("pw".to_string()).await.unwrap();
        assert!(service
            .verify_password("pw".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!service
            .verify_password("other".to_string(), hash)
            .await
            .unwrap());
    }
}
