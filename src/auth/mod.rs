//! Authentication Module
//!
//! This module handles user accounts, credential verification, and session
//! management. It provides the HTTP handlers for the authentication
//! endpoints and owns the password and token policies.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token generation, validation, and the session cookie
//! - **`validate`** - Registration input validation
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing policy
//! ├── sessions.rs     - JWT token management and session cookie
//! ├── validate.rs     - Registration input validation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── login.rs    - Login handler
//!     ├── register.rs - Registration handler
//!     └── users.rs    - Users listing handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → validated → hashed → stored
//! 2. **Login**: email, password → verified → session token issued (body
//!    and, by default, cookie)
//! 3. **Users**: token verified by the gate → account listing returned

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration input validation
pub mod validate;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, SessionUser, UserSummary};
pub use handlers::{get_users, login, register};
