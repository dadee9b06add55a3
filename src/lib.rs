//! Authgate - Authentication Backend
//!
//! Authgate is a small authentication service: registration, login with
//! JWT sessions (body and cookie transport), a token-gated account
//! listing, and fire-and-forget audit notifications to an external
//! webhook collector.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, shared state, and app assembly
//! - **`routes`** - Router and route table
//! - **`auth`** - User store, password policy, sessions, validation, and
//!   the HTTP handlers
//! - **`middleware`** - The token gate protecting private routes
//! - **`audit`** - Webhook delivery of login/register outcomes
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = Config::from_env();
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Everything is driven by environment variables read once at startup;
//! see `server::config::Config`. Feature toggles allow running without
//! cookies, input validation, audit delivery, or the token gate.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, error::AuthError>`; the error type owns the
//! status codes and the exact client-facing messages of the API contract.

/// Webhook audit notifications
pub mod audit;

/// Authentication: users, passwords, sessions, validation, handlers
pub mod auth;

/// Error taxonomy and conversions
pub mod error;

/// HTTP middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server configuration, state, and assembly
pub mod server;
