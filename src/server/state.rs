/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container for the application, holding:
 * - The SQLite connection pool
 * - The immutable service configuration
 * - The audit notifier, when one is configured
 *
 * # Thread Safety
 *
 * Every field is clonable and thread-safe: the pool and the reqwest client
 * inside the notifier are handle types around shared internals, and the
 * config is immutable after startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers that only need one piece of
 * state extract it directly, e.g. `State(pool): State<SqlitePool>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::audit::AuditNotifier;
use crate::server::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,

    /// Service configuration, read once at startup
    pub config: Config,

    /// Audit collector handle
    ///
    /// `None` when audit notification is toggled off or no webhook URL is
    /// configured; handlers skip delivery in that case.
    pub audit: Option<AuditNotifier>,
}

/// Allow handlers to extract the pool directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for Config {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Allow handlers to extract the audit notifier directly
impl FromRef<AppState> for Option<AuditNotifier> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.audit.clone()
    }
}
