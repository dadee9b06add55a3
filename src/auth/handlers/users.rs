/**
 * Users Listing Handler
 *
 * This module implements the handler for GET /api/users, the route the
 * token gate protects. The listing returns every stored account as a
 * `UserSummary`, so password hashes never appear in the payload.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{UserSummary, UsersResponse};
use crate::auth::users;
use crate::error::AuthError;

/// Users listing handler
///
/// The token gate has already run by the time this executes; the handler
/// itself only needs the pool.
///
/// # Errors
///
/// * `500 Internal Server Error` - Database failure
pub async fn get_users(State(pool): State<SqlitePool>) -> Result<Json<UsersResponse>, AuthError> {
    let users = users::list_users(&pool).await?;

    tracing::debug!("Listing {} users", users.len());

    Ok(Json(UsersResponse {
        data: users.into_iter().map(UserSummary::from).collect(),
        message: "Get users SuccessFully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    use crate::auth::users::{create_user, init_schema};

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let pool = test_pool().await;

        let Json(body) = get_users(State(pool)).await.unwrap();
        assert!(body.data.is_empty());
        assert_eq!(body.message, "Get users SuccessFully");
    }

    #[tokio::test]
    async fn test_listing_carries_no_hashes() {
        let pool = test_pool().await;
        create_user(
            &pool,
            "messi".to_string(),
            "leo.messi@mail.com".to_string(),
            "$2b$10$hash".to_string(),
        )
        .await
        .unwrap();
        create_user(
            &pool,
            "ronaldo".to_string(),
            "cr7@mail.com".to_string(),
            "$2b$10$hash".to_string(),
        )
        .await
        .unwrap();

        let Json(body) = get_users(State(pool)).await.unwrap();
        assert_eq!(body.data.len(), 2);

        let value = serde_json::to_value(&body).unwrap();
        for entry in value["data"].as_array().unwrap() {
            assert!(entry.get("password_hash").is_none());
            assert!(entry.get("email").is_some());
        }
    }
}
