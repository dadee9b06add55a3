/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy for the authentication service.
 * Every failure a handler can produce maps to exactly one variant, and each
 * variant owns its HTTP status code and its client-facing message.
 *
 * # Error Types
 *
 * - `NotFound` - Login attempted for an email with no account
 * - `InvalidCredentials` - Password did not match the stored hash
 * - `DuplicateEmail` - Registration attempted with an email already in use
 * - `Validation` - Request payload failed input validation
 * - `Unauthorized` - Protected route hit without a token
 * - `Forbidden` - Protected route hit with a token that failed verification
 * - `Internal` - Database, hashing, or token issuance failure
 *
 * # Client Messages
 *
 * The strings returned by `message()` are part of the API contract and are
 * matched verbatim by existing clients, including their historical spelling.
 * `Internal` deliberately collapses to a generic message so that database
 * and hashing details never reach the wire; the detail string is kept for
 * server-side logging only.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Service-wide error type for the authentication flows
///
/// Each variant corresponds to one observable API outcome. Handlers return
/// `Result<_, AuthError>` and let the `IntoResponse` impl in
/// `error::conversion` produce the HTTP reply.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account exists for the supplied email
    #[error("no account found for this email")]
    NotFound,

    /// Password verification failed for an existing account
    #[error("password mismatch")]
    InvalidCredentials,

    /// Registration hit the unique index on `users.email`
    #[error("email already registered")]
    DuplicateEmail,

    /// Request payload failed input validation
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable description of the offending field
        message: String,
    },

    /// Protected route was hit with no token at all
    #[error("missing authentication token")]
    Unauthorized,

    /// Protected route was hit with a token that failed verification
    #[error("token verification failed")]
    Forbidden,

    /// Infrastructure failure (database, hashing, token issuance)
    #[error("internal error: {detail}")]
    Internal {
        /// Server-side detail, logged but never sent to clients
        detail: String,
    },
}

impl AuthError {
    /// Create a validation error for a rejected request field
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error from any infrastructure failure
    ///
    /// The detail is logged when the response is built; clients only ever
    /// see the generic message.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `InvalidCredentials` - 400 Bad Request
    /// - `DuplicateEmail` - 409 Conflict
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message for this error
    ///
    /// These strings are matched verbatim by clients. `Unauthorized` is
    /// empty: the token gate answers a bare 401 with no body.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound => "No account found for this user".to_string(),
            // "Invalide" is a historical typo clients match on.
            Self::InvalidCredentials => "Invalide Email or Password".to_string(),
            Self::DuplicateEmail => "Email already exists".to_string(),
            Self::Validation { message } => message.clone(),
            Self::Unauthorized => String::new(),
            Self::Forbidden => "You are not authorized to view this content.".to_string(),
            Self::Internal { .. } => "Server error".to_string(),
        }
    }
}
