/**
 * Password Hashing
 *
 * This module owns the password hashing policy for the service. All
 * persistence paths go through `hash_password`, so a plaintext password
 * never reaches the credential store.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at cost 10
 * - Verification uses bcrypt's constant-time comparison
 * - Hashes embed their salt and cost, so verification needs no extra state
 */

use bcrypt::{hash, verify};

use crate::error::AuthError;

/// bcrypt cost factor used for all new hashes
///
/// Cost 10 matches the hashes already in production databases; stored
/// hashes carry their own cost, so raising this later only affects new
/// registrations.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password for storage
///
/// # Errors
///
/// Returns `AuthError::Internal` if bcrypt fails, which in practice means
/// the cost parameter was out of range or the RNG was unavailable.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(hash(password, HASH_COST)?)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(false)` for a well-formed hash that does not match; an
/// error only means the stored hash itself was unparseable.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(verify(password, password_hash)?)
}
