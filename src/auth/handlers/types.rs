/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Response field order mirrors what clients
 * already parse, so the types double as the wire contract.
 *
 * Both public user shapes (`SessionUser`, `UserSummary`) are built from
 * the store's `User` via `From`, and neither has a field for the password
 * hash, so no response can carry one.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Register request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's display name (3-30 chars, alphanumeric + underscore)
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Login response
///
/// Contains the greeting message, the identity object, and the session
/// token. When cookie transport is enabled the same token also travels in
/// a `Set-Cookie` header.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
    pub token: String,
}

/// Identity object returned by login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub id: String,
}

/// Register response
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub data: UserSummary,
}

/// Users listing response
#[derive(Serialize, Debug)]
pub struct UsersResponse {
    pub data: Vec<UserSummary>,
    pub message: String,
}

/// Public view of a stored user
///
/// Everything from the row except the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            id: user.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "11111111-2222-3333-4444-555555555555".to_string(),
            name: "messi".to_string(),
            email: "leo.messi@mail.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_summary_has_no_hash_field() {
        let summary = UserSummary::from(sample_user());
        let value = serde_json::to_value(&summary).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "name", "email", "created_at"]);
    }

    #[test]
    fn test_session_user_shape() {
        let user = sample_user();
        let session = SessionUser::from(&user);
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["email"], "leo.messi@mail.com");
        assert_eq!(value["name"], "messi");
        assert_eq!(value["id"], user.id);
        assert!(value.get("password_hash").is_none());
    }
}
