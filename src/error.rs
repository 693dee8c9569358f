//! Error types for schema-sync operations.
//!
//! This module defines [`SyncError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SyncError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SyncError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for schema-sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Invalid configuration values (e.g., pattern/version count mismatch).
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// A subject pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The registry returned an error or could not be reached.
    #[error("Schema registry error: {message}")]
    Registry { message: String },

    /// A requested schema does not exist in the registry.
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// A schema resource name did not have the expected
    /// `projects/{project}/schemas/{schema}` shape.
    #[error("Malformed schema name: {name}")]
    MalformedName { name: String },

    /// A schema of a type other than Avro or Protocol Buffer reached
    /// path resolution.
    #[error("Schema '{name}' has an unsupported type; only Avro and Protocol Buffer schemas can be stored")]
    UnsupportedType { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for schema-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
