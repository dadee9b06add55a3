//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs    - Module exports and documentation
//! └── router.rs - Main router creation
//! ```
//!
//! # Routes
//!
//! - `GET /` - Liveness greeting
//! - `POST /api/login` - User login
//! - `POST /api/register` - User registration
//! - `GET /api/users` - List accounts (requires a verified session)
//!
//! Unknown paths return a plain-text 404.

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
