/**
 * Server Configuration
 *
 * This module loads the service configuration from the environment, once,
 * at startup. Everything downstream receives the resulting `Config` value;
 * no other module reads environment variables.
 *
 * # Configuration Sources
 *
 * All settings come from environment variables (usually via `.env`), with
 * defaults chosen for local development. Malformed values are logged and
 * replaced by their default rather than aborting startup; the one thing
 * that does abort is a database that cannot be opened, because nothing
 * works without the credential store.
 *
 * # Feature Toggles
 *
 * The `Features` block switches individual behaviors of the auth flow on
 * and off at runtime. Everything defaults to on; the toggles exist so the
 * service can be run in reduced configurations (no cookie, no validation,
 * no audit trail, open users endpoint) without a rebuild.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqlitePoolOptions, SqliteConnectOptions};
use sqlx::SqlitePool;

/// Fallback signing secret for local development
const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

/// Runtime feature toggles for the auth flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Set the session cookie on successful login
    pub cookie_transport: bool,
    /// Validate registration payloads before hashing
    pub input_validation: bool,
    /// Forward login/register outcomes to the audit collector
    pub audit_notification: bool,
    /// Require a verified token on `/api/users`
    pub token_gate: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            cookie_transport: true,
            input_validation: true,
            audit_notification: true,
            token_gate: true,
        }
    }
}

/// Immutable service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,
    /// Port the HTTP server binds on
    pub server_port: u16,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Session lifetime in seconds; drives both the JWT `exp` and the
    /// cookie `Max-Age`
    pub token_ttl_secs: u64,
    /// Audit collector base URL; `None` disables audit delivery
    pub webhook_url: Option<String>,
    /// Runtime feature toggles
    pub features: Features,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Never fails: missing variables get defaults, malformed ones are
    /// logged and defaulted.
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using development fallback");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            server_port: env_parsed("SERVER_PORT", 3000),
            jwt_secret,
            token_ttl_secs: env_parsed("TOKEN_TTL_SECS", 3600),
            webhook_url: std::env::var("N8N_WEBHOOK_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            features: Features {
                cookie_transport: env_flag("AUTH_COOKIE_TRANSPORT", true),
                input_validation: env_flag("AUTH_INPUT_VALIDATION", true),
                audit_notification: env_flag("AUTH_AUDIT_NOTIFICATION", true),
                token_gate: env_flag("AUTH_TOKEN_GATE", true),
            },
        }
    }
}

/// Read a parseable variable, falling back to a default on absence or a
/// value that fails to parse
fn env_parsed<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("{} has unparseable value {:?}, using {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

/// Read a boolean toggle
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off` in any case.
fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                tracing::warn!("{} has unparseable value {:?}, using {}", name, other, default);
                default
            }
        },
        Err(_) => default,
    }
}

/// Open the database connection pool
///
/// Creates the database file if it does not exist. In-memory databases get
/// a single-connection pool that never recycles: every pooled connection
/// to `sqlite::memory:` would otherwise see its own empty database.
///
/// # Errors
///
/// Returns the sqlx error if the URL is malformed or the database cannot
/// be opened. Callers treat this as fatal.
pub async fn connect_database(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = config.database_url.contains(":memory:")
        || config.database_url.contains("mode=memory");

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}
