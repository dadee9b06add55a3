/**
 * Token Gate Middleware
 *
 * This middleware protects routes that require an authenticated session.
 * It looks for the session token in the `token` cookie first and falls
 * back to an `Authorization: Bearer` header, verifies it, and attaches the
 * verified identity to the request extensions.
 *
 * # Outcomes
 *
 * - No token (or an empty one): bare 401, empty body
 * - Token present but unverifiable (bad signature, expired, malformed):
 *   403 with the standard refusal message
 * - Token verified: request proceeds with `CurrentUser` attached
 *
 * When the token gate feature is toggled off, requests pass through
 * unchanged and no identity is attached.
 */

use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::{verify_token, SESSION_COOKIE};
use crate::error::AuthError;
use crate::server::state::AppState;

/// Verified identity extracted from the session token
///
/// Inserted into request extensions by `token_gate`; handlers read it via
/// `Extension<CurrentUser>`.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Token gate middleware
///
/// # Errors
///
/// * `AuthError::Unauthorized` - No token in the cookie or header
/// * `AuthError::Forbidden` - Token present but failed verification
pub async fn token_gate(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if !app_state.config.features.token_gate {
        return Ok(next.run(request).await);
    }

    // Cookie first, Bearer header as fallback for non-browser clients
    let token = cookie_token(request.headers()).or_else(|| bearer_token(request.headers()));

    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => {
            tracing::warn!("Request to protected route without a token");
            return Err(AuthError::Unauthorized);
        }
    };

    let claims = verify_token(&token, &app_state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e);
        AuthError::Forbidden
    })?;

    tracing::debug!("Authenticated request from {}", claims.email);

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
    });

    Ok(next.run(request).await)
}

/// Pull the session token out of the `Cookie` header
///
/// Pairs that do not parse are skipped rather than failing the whole
/// header.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Pull the session token out of an `Authorization: Bearer` header
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}
