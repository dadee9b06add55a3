//! Error Module
//!
//! This module defines the error taxonomy for the authentication service.
//! Handlers return `AuthError` and the conversion impls turn it into the
//! HTTP reply the API contract requires.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status/message mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `AuthError` implements `IntoResponse`, so handlers can return
//! `Result<_, AuthError>` directly. Every error becomes a JSON body of the
//! form `{"message": "..."}` with the variant's status code, except
//! `Unauthorized`, which is a bare 401 with an empty body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AuthError;
