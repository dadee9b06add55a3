//! Middleware Module
//!
//! This module contains all HTTP middleware for the server. Middleware
//! functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Token gate for routes that require a verified session

pub mod auth;

pub use auth::{token_gate, CurrentUser};
