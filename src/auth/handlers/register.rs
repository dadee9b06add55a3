/**
 * Register Handler
 *
 * This module implements the user registration handler for POST
 * /api/register.
 *
 * # Registration Process
 *
 * 1. Validate the payload, if input validation is enabled (400 on reject)
 * 2. Hash the password with bcrypt
 * 3. Insert the user; the unique email index turns duplicates into a 409
 * 4. Return 201 with the stored user, minus the hash
 *
 * # Audit
 *
 * Outcomes are reported to the audit collector as Success or Fail.
 * Validation rejects are not reported: a payload that never passed the
 * front door is not a registration attempt against the store.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::audit::AuditStatus;
use crate::auth::handlers::types::{RegisterRequest, RegisterResponse, UserSummary};
use crate::auth::password::hash_password;
use crate::auth::users::create_user;
use crate::auth::validate::validate_registration;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Register handler
///
/// # Arguments
///
/// * `State(app_state)` - Application state (pool, config, audit)
/// * `Json(request)` - Registration request with name, email, password
///
/// # Errors
///
/// * `400 Bad Request` - Payload failed validation
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing or database failure
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    tracing::info!(
        "Register request for name: {}, email: {}",
        request.name,
        request.email
    );

    if app_state.config.features.input_validation {
        validate_registration(&request.name, &request.email, &request.password)?;
    }

    let result = create_account(&app_state, &request).await;

    if let Some(audit) = &app_state.audit {
        let status = if result.is_ok() {
            AuditStatus::Success
        } else {
            AuditStatus::Fail
        };
        audit.notify_register(&request.name, &request.email, status);
    }

    result
}

/// Hash the password and insert the account
async fn create_account(
    app_state: &AppState,
    request: &RegisterRequest,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        &app_state.pool,
        request.name.clone(),
        request.email.clone(),
        password_hash,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Register Successfully!, Please Login".to_string(),
            data: UserSummary::from(user),
        }),
    ))
}
