//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and database connection
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration and feature toggles
//! └── init.rs   - App assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: one read of the environment into `Config`
//! 2. **Database**: pool creation and schema setup
//! 3. **Audit**: notifier construction, when configured
//! 4. **Router Creation**: routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{Config, Features};
pub use init::create_app;
pub use state::AppState;
