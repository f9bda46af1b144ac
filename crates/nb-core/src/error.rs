//! # AppError
//!
//! Centralized error handling for the notice-board crates.
//! Storage failures never appear here: the store contract (see
//! [`crate::traits::KvStore`]) degrades to "absent" instead of erroring,
//! so the variants below cover only user-facing failures.

use thiserror::Error;

/// The primary error type for board operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Rejected input (e.g., empty title/content, blank category label).
    #[error("validation error: {0}")]
    Validation(String),

    /// Credential check failed. Deliberately generic: the message never
    /// says which field was wrong.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Resource already exists (e.g., duplicate category label).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unexpected infrastructure failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for board logic.
pub type Result<T> = std::result::Result<T, AppError>;
