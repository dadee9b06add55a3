/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 * The signing secret and token lifetime come from the caller (ultimately
 * from `server::config::Config`), so this module never reads the
 * environment itself.
 *
 * # Token Lifetime
 *
 * One lifetime governs the whole session: the JWT `exp` claim and the
 * cookie `Max-Age` are both derived from the same configured TTL, so a
 * browser cookie can never outlive the token inside it.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "token";

/// JWT claims structure
///
/// `sub` carries the user id; `email` and `name` ride along so the gate
/// can hand handlers a usable identity without a database round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Create a signed session token for a user
///
/// # Arguments
///
/// * `user` - The authenticated user the token identifies
/// * `secret` - HMAC signing secret
/// * `ttl_secs` - Seconds until the token expires
///
/// # Returns
///
/// Encoded JWT string
pub fn issue_token(
    user: &User,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp() as u64;

    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        name: user.name.clone(),
        iat: now,
        exp: now + ttl_secs,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Signature and expiry are both checked; the default validation allows
/// 60 seconds of clock leeway on `exp`.
///
/// # Returns
///
/// Decoded claims or error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Build the `Set-Cookie` value carrying a session token
///
/// The cookie's `Max-Age` is the same TTL the token was issued with.
/// `Secure` and `SameSite=None` are required for the browser frontend,
/// which runs on a different origin; `HttpOnly` keeps the token out of
/// reach of page scripts.
pub fn session_cookie(token: &str, ttl_secs: u64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; Secure; SameSite=None",
        SESSION_COOKIE, token, ttl_secs
    )
}
