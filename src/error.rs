//! Error types for the page tree index.

use crate::types::NodeId;
use thiserror::Error;

/// Failures coming from the durable storage layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Path '{path}' is already indexed for locale '{locale}'")]
    PathConflict { locale: String, path: String },

    #[error("Tree node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Corrupt index entry: {0}")]
    CorruptIndex(String),
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// A tree node that cannot be written as given
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Depth {depth} does not match path '{path}' (expected {expected})")]
    DepthMismatch {
        path: String,
        depth: u32,
        expected: u32,
    },

    #[error("Invalid locale code '{0}'")]
    InvalidLocale(String),
}

/// Top-level error surfaced by the page tree API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
