/**
 * Error Conversion
 *
 * This module provides conversion implementations for authentication errors:
 * the Axum `IntoResponse` impl that turns an `AuthError` into the wire reply,
 * and `From` impls that fold infrastructure errors into the taxonomy.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single `message` field:
 * ```json
 * {
 *   "message": "Email already exists"
 * }
 * ```
 *
 * The one exception is `Unauthorized`: the token gate answers a bare 401
 * with an empty body, so no JSON is emitted for it.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    /// Convert an authentication error into an HTTP response
    ///
    /// The status code and client message come from `status_code()` and
    /// `message()`. `Internal` errors log their detail here, at the last
    /// point the detail is still available, and send only the generic
    /// message to the client.
    fn into_response(self) -> Response {
        if let AuthError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        if matches!(self, AuthError::Unauthorized) {
            return status.into_response();
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    /// Fold a database error into the taxonomy
    ///
    /// A unique-constraint violation means the email column rejected a
    /// duplicate, which is a client-visible 409. Everything else is an
    /// internal failure.
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AuthError::DuplicateEmail;
            }
        }
        AuthError::internal(format!("database error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AuthError::internal(format!("bcrypt error: {}", err))
    }
}
