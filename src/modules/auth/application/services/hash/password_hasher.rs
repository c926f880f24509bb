/// One-way credential hashing. Implementations must never expose or log
/// the plaintext, and `verify_password` must fail closed: a mismatch is
/// `Ok(false)`, a hash that cannot be parsed is `Err`.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, String>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, String>;
}
