//! Common error handling utilities for the HomeCare+ engine
//!
//! This crate provides the process-level error type and the stable error
//! codes shared by the symptom engine, the database layer and the HTTP
//! server.
//!
//! # Error Categories
//!
//! - **DatabaseError** / **MigrationError**: Database connection, query and
//!   schema migration errors
//! - **ModelError**: Keyword model loading and integrity errors
//! - **NetworkError** / **ServerError**: Transport and runtime failures
//! - **ConfigError**: Missing or malformed configuration
//!
//! # Example
//!
//! ```rust
//! use error_common::{HomecareError, Result};
//!
//! fn require_database_url(value: Option<&str>) -> Result<&str> {
//!     value.ok_or_else(|| HomecareError::ConfigError("DATABASE_URL is not set".to_string()))
//! }
//!
//! let err = require_database_url(None).unwrap_err();
//! assert_eq!(err.code(), "SYS_9001");
//! assert_eq!(require_database_url(Some("postgresql://db")).unwrap_or_default(), "postgresql://db");
//! ```

pub mod codes;
pub mod types;

pub use codes::*;
pub use types::*;
