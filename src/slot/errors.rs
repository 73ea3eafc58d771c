//! # Slot Errors

use std::io;

use thiserror::Error;

/// Result type for slot operations
pub type SlotResult<T> = Result<T, SlotError>;

/// Slot errors
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to read slot '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Slot '{key}' unavailable: {reason}")]
    Unavailable { key: String, reason: String },
}

impl SlotError {
    pub(crate) fn read(key: &str, source: io::Error) -> Self {
        SlotError::Read {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn write(key: &str, source: io::Error) -> Self {
        SlotError::Write {
            key: key.to_string(),
            source,
        }
    }

    /// Stable error code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            SlotError::InvalidKey(_) => "STOCK_SLOT_INVALID_KEY",
            SlotError::Read { .. } => "STOCK_SLOT_READ_FAILED",
            SlotError::Write { .. } => "STOCK_SLOT_WRITE_FAILED",
            SlotError::Unavailable { .. } => "STOCK_SLOT_UNAVAILABLE",
        }
    }
}
