//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the authentication
//! endpoints. Handlers are organized into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Login handler
//! ├── register.rs - Registration handler
//! └── users.rs    - Users listing handler
//! ```
//!
//! # Handlers
//!
//! - **`login`** - POST /api/login - Authenticate and issue a session
//! - **`register`** - POST /api/register - Create an account
//! - **`get_users`** - GET /api/users - List accounts (token gated)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Session tokens are signed JWTs with a configured TTL
//! - Response types have no field for the password hash, so it cannot
//!   appear in any payload

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Registration handler
pub mod register;

/// Users listing handler
pub mod users;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, SessionUser, UserSummary, UsersResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
pub use users::get_users;
