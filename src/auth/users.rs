/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations against the
 * `users` table. All functions take the pool explicitly, so the store has
 * no global state and tests can run against an in-memory database.
 *
 * # Data Model
 *
 * `User` deliberately does not implement `Serialize`: rows carry the
 * password hash, and keeping the row type off the JSON boundary means no
 * handler can leak a hash by accident. API-facing shapes live in
 * `auth::handlers::types` and are built via `From<User>`.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4, stored as TEXT)
    pub id: String,
    /// Display name (3-30 chars, alphanumeric + underscore)
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create the `users` table if it does not exist
///
/// Runs at startup against whatever database `DATABASE_URL` points at.
/// The unique index on `email` is what turns duplicate registrations into
/// constraint violations.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create a new user
///
/// The id is generated here (UUID v4); the caller supplies an
/// already-hashed password.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - User's display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or the underlying database error. A duplicate email
/// surfaces as a unique-constraint violation.
pub async fn create_user(
    pool: &SqlitePool,
    name: String,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, name, email, password_hash, created_at
        "#,
    )
    .bind(&id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get all users, oldest first
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    // In-memory SQLite hands each new connection a fresh database, so the
    // pool is pinned to a single connection.
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
    async fn test_create_and_fetch_user() {
        let pool = test_pool().await;

        let created = create_user(
            &pool,
            "messi".to_string(),
            "leo.messi@mail.com".to_string(),
            "$2b$10$fakehash".to_string(),
        )
        .await
        .unwrap();

        assert!(uuid::Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.name, "messi");

        let fetched = get_user_by_email(&pool, "leo.messi@mail.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.password_hash, "$2b$10$fakehash");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let pool = test_pool().await;

        let user = get_user_by_email(&pool, "nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_violates_unique_index() {
        let pool = test_pool().await;

        create_user(
            &pool,
            "first".to_string(),
            "same@example.com".to_string(),
            "$2b$10$hash1".to_string(),
        )
        .await
        .unwrap();

        let err = create_user(
            &pool,
            "second".to_string(),
            "same@example.com".to_string(),
            "$2b$10$hash2".to_string(),
        )
        .await
        .unwrap_err();

        let db_err = err.as_database_error().expect("expected database error");
        assert!(db_err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_list_users_returns_everyone() {
        let pool = test_pool().await;

        for i in 0..3 {
            create_user(
                &pool,
                format!("user_{}", i),
                format!("user{}@example.com", i),
                "$2b$10$hash".to_string(),
            )
            .await
            .unwrap();
        }

        let users = list_users(&pool).await.unwrap();
        assert_eq!(users.len(), 3);
        assert!(users.iter().any(|u| u.email == "user1@example.com"));
    }
}
