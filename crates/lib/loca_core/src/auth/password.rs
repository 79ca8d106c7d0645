//! Password hashing via bcrypt.

use super::AuthError;

/// bcrypt cost factor; hashes embed their own salt and cost.
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Check a plaintext password against a stored hash.
///
/// `Ok(false)` means a clean mismatch; `Err` means the stored hash itself
/// could not be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
}
