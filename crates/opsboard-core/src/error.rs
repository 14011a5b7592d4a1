//! Core error types for opsboard-core.
//!
//! This module defines the error hierarchy used across the library, built
//! on thiserror. The layout and scoring computations themselves are pure
//! and total; errors arise only at the parse and configuration boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for opsboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date string could not be parsed as a calendar date
    #[error("Invalid calendar date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// A dashboard record could not be converted into a timeline item
    #[error("Invalid item '{item_id}': {message}")]
    InvalidItem { item_id: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a weight table file
    #[error("Failed to load weight table from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse a weight table
    #[error("Failed to parse weight table: {0}")]
    ParseFailed(String),

    /// A role's weight vector failed validation
    #[error("Invalid weights for role '{role}': {message}")]
    InvalidWeights { role: String, message: String },

    /// Unknown role name
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
