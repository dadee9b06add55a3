/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email (404 if absent)
 * 2. Verify the password against the stored bcrypt hash (400 on mismatch)
 * 3. Issue a session token with the configured TTL
 * 4. Return the greeting, identity object, and token; when cookie
 *    transport is on, also set the session cookie
 *
 * # Audit
 *
 * Every attempt that reaches the account flow is reported to the audit
 * collector as Success or Fail, including lookups for unknown emails. The
 * report is fire-and-forget and never delays the response.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::audit::AuditStatus;
use crate::auth::handlers::types::{LoginRequest, LoginResponse, SessionUser};
use crate::auth::password::verify_password;
use crate::auth::sessions::{issue_token, session_cookie};
use crate::auth::users::get_user_by_email;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(app_state)` - Application state (pool, config, audit)
/// * `Json(request)` - Login request containing email and password
///
/// # Errors
///
/// * `404 Not Found` - No account exists for the email
/// * `400 Bad Request` - Password does not match
/// * `500 Internal Server Error` - Database, hashing, or token failure
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    tracing::info!("Login request for: {}", request.email);

    let result = authenticate(&app_state, &request).await;

    if let Some(audit) = &app_state.audit {
        let status = if result.is_ok() {
            AuditStatus::Success
        } else {
            AuditStatus::Fail
        };
        audit.notify_login(&request.email, status);
    }

    result
}

/// Run the credential check and build the success response
async fn authenticate(
    app_state: &AppState,
    request: &LoginRequest,
) -> Result<Response, AuthError> {
    let user = get_user_by_email(&app_state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("No account found for: {}", request.email);
            AuthError::NotFound
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Password mismatch for: {}", request.email);
        return Err(AuthError::InvalidCredentials);
    }

    let config = &app_state.config;
    let token = issue_token(&user, &config.jwt_secret, config.token_ttl_secs)
        .map_err(|e| AuthError::internal(format!("token issuance failed: {}", e)))?;

    let body = LoginResponse {
        message: format!("Login Successfully!, Welcome {}", user.name),
        user: SessionUser::from(&user),
        token: token.clone(),
    };

    let mut response = (StatusCode::OK, Json(body)).into_response();

    if config.features.cookie_transport {
        let cookie = session_cookie(&token, config.token_ttl_secs);
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| AuthError::internal(format!("cookie header: {}", e)))?;
        response.headers_mut().insert(SET_COOKIE, value);
    }

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(response)
}
