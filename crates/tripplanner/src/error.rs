//! Error types for tripplanner.
//!
//! This module defines all error types used throughout the tripplanner crate.
//! Container faults (bad index, shrinking below the live length) are
//! programmer errors surfaced at the call site; the shell keeps them out of
//! reach by validating its own input.

use thiserror::Error;

/// The main error type for tripplanner operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Container Errors ===
    /// An index was outside the live range of a dynamic array.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// A resize requested less room than the array currently uses.
    #[error("new capacity {requested} cannot be less than the current length {len}")]
    CapacityTooSmall {
        /// The requested capacity.
        requested: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Console or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for tripplanner operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new out-of-range index error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a new capacity-too-small error.
    #[must_use]
    pub fn capacity_too_small(requested: usize, len: usize) -> Self {
        Self::CapacityTooSmall { requested, len }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is an out-of-range index access.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this error is an invalid resize request.
    #[must_use]
    pub fn is_capacity_too_small(&self) -> bool {
        matches!(self, Self::CapacityTooSmall { .. })
    }
}
