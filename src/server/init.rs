/**
 * Server Initialization
 *
 * This module assembles the application: it opens the database, prepares
 * the schema, builds the audit notifier when one is configured, and wires
 * everything into the router.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and create the `users` table if missing
 * 2. Build the audit notifier (feature toggle and webhook URL permitting)
 * 3. Create the shared `AppState`
 * 4. Create the router
 *
 * A database that cannot be opened is fatal; a missing audit collector is
 * not, the service just runs without an audit trail.
 */

use axum::Router;

use crate::audit::AuditNotifier;
use crate::auth::users::init_schema;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, Config};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Service configuration, usually from `Config::from_env()`
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns the sqlx error if the database cannot be opened or the schema
/// cannot be created.
pub async fn create_app(config: Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing auth server");

    // Step 1: open the database and make sure the schema exists
    let pool = connect_database(&config).await?;
    init_schema(&pool).await?;
    tracing::info!("User schema ready");

    // Step 2: audit notifier, when configured
    let audit = build_notifier(&config);

    // Step 3: shared state
    let app_state = AppState {
        pool,
        config,
        audit,
    };

    // Step 4: router with all routes
    Ok(create_router(app_state))
}

/// Build the audit notifier if the feature is on and a URL is configured
fn build_notifier(config: &Config) -> Option<AuditNotifier> {
    if !config.features.audit_notification {
        tracing::info!("Audit notification disabled by configuration");
        return None;
    }

    let url = match &config.webhook_url {
        Some(url) => url,
        None => {
            tracing::warn!("N8N_WEBHOOK_URL not set, audit notification disabled");
            return None;
        }
    };

    match AuditNotifier::new(url) {
        Ok(notifier) => {
            tracing::info!("Audit notifier targeting {}", url);
            Some(notifier)
        }
        Err(e) => {
            tracing::error!("Failed to build audit HTTP client: {}", e);
            None
        }
    }
}
