/**
 * Registration Input Validation
 *
 * This module validates registration payloads before any hashing or
 * database work happens. Validation can be switched off via configuration
 * (`Features::input_validation`), in which case the handler skips the call
 * entirely; the rules themselves do not change.
 *
 * # Rules
 *
 * - Name: 3-30 characters, letters, digits, and underscores only
 * - Email: exactly one '@', non-empty local part, domain with a dot
 * - Password: at least 6 characters
 */

use crate::error::AuthError;

/// Validate a registration payload
///
/// Checks run in field order (name, email, password) and the first failure
/// wins, so a request with several bad fields reports the name error.
///
/// # Errors
///
/// Returns `AuthError::Validation` with a field-specific message.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), AuthError> {
    if !is_valid_name(name) {
        return Err(AuthError::validation(
            "Name must be 3-30 characters and contain only letters, numbers, and underscores",
        ));
    }

    if !is_valid_email(email) {
        return Err(AuthError::validation("Invalid email format"));
    }

    if password.len() < 6 {
        return Err(AuthError::validation(
            "Password must be at least 6 characters",
        ));
    }

    Ok(())
}

/// Validate the display name format
///
/// Names must be 3-30 characters of `[A-Za-z0-9_]`. Leading digits and
/// underscores are allowed.
pub fn is_valid_name(name: &str) -> bool {
    if name.len() < 3 || name.len() > 30 {
        return false;
    }

    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate the email shape
///
/// This is a plausibility check, not RFC 5321: exactly one '@', no
/// whitespace, a non-empty local part, and a domain containing a dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    if email.matches('@').count() != 1 {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && domain.contains('.'),
        None => false,
    }
}
