//! Error types for the frame tracker.

use crate::frame::{Collection, FrameId};
use thiserror::Error;

/// Backend-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors surfaced to callers of the frame store
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Frame '{0}' already exists.")]
    DuplicateName(String),

    #[error("Frame {id} not found in {collection}")]
    NotFound { collection: Collection, id: FrameId },

    #[error("Invalid frame id: {0}")]
    InvalidId(String),

    #[error("Frame name is required.")]
    EmptyName,

    #[error("Invalid status: {0} (expected InHouse, OutHouse or InRepair)")]
    InvalidStatus(String),

    #[error("Unknown collection: {0} (expected design_frames or bp_frames)")]
    UnknownCollection(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::StoreUnavailable(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ApiError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ApiError::Export(err.to_string())
    }
}
