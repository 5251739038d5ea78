//! Password hashing and verification.

use crate::error::AppError;

/// bcrypt cost factor. Each hash carries its own salt.
const HASH_COST: u32 = 10;

/// Hash a plaintext password.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, HASH_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Compare a plaintext password against a stored hash.
///
/// Uses the library's compare primitive, which is constant-time-safe.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
