//! Store error types
//!
//! Three kinds reach callers:
//! - STOCK_PERSISTENCE_READ_ERROR: slot unreadable or contents unparsable
//! - STOCK_PERSISTENCE_WRITE_ERROR: the durable write did not complete
//! - STOCK_ID_EXHAUSTED: the id generator kept returning ids already in use
//!
//! None is retried. In every case the in-memory collection is unchanged.

use thiserror::Error;

use crate::codec::CodecError;
use crate::slot::SlotError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Underlying cause of a persistence failure
#[derive(Debug, Error)]
pub enum PersistenceFailure {
    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("[STOCK_PERSISTENCE_READ_ERROR] cannot load products from slot '{key}': {source}")]
    PersistenceRead {
        key: String,
        #[source]
        source: PersistenceFailure,
    },

    #[error("[STOCK_PERSISTENCE_WRITE_ERROR] cannot save products to slot '{key}': {source}")]
    PersistenceWrite {
        key: String,
        #[source]
        source: PersistenceFailure,
    },

    #[error("[STOCK_ID_EXHAUSTED] no unused product id after {attempts} attempts (slot '{key}')")]
    IdExhausted { key: String, attempts: u32 },
}

impl StoreError {
    pub(crate) fn read(key: &str, source: impl Into<PersistenceFailure>) -> Self {
        StoreError::PersistenceRead {
            key: key.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn write(key: &str, source: impl Into<PersistenceFailure>) -> Self {
        StoreError::PersistenceWrite {
            key: key.to_string(),
            source: source.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::PersistenceRead { .. } => "STOCK_PERSISTENCE_READ_ERROR",
            StoreError::PersistenceWrite { .. } => "STOCK_PERSISTENCE_WRITE_ERROR",
            StoreError::IdExhausted { .. } => "STOCK_ID_EXHAUSTED",
        }
    }

    pub fn is_read_error(&self) -> bool {
        matches!(self, StoreError::PersistenceRead { .. })
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, StoreError::PersistenceWrite { .. })
    }

    /// Slot key the failing operation targeted
    pub fn key(&self) -> &str {
        match self {
            StoreError::PersistenceRead { key, .. }
            | StoreError::PersistenceWrite { key, .. }
            | StoreError::IdExhausted { key, .. } => key,
        }
    }
}
