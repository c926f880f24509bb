mod argon2_hasher;
mod password_hasher;
mod password_hashing_service;

pub use argon2_hasher::Argon2Hasher;
pub use password_hasher::PasswordHasher;
pub use password_hashing_service::PasswordHashingService;
