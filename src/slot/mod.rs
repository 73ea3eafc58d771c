//! Durable key-value slots
//!
//! A slot maps a key to one text blob. The store keeps the whole product
//! collection under a single key, so every write replaces the blob.
//!
//! # Backends
//!
//! - [`FileSlot`]: one file per key, written via temp file + fsync + rename
//! - [`MemorySlot`]: in-process map with failure injection

mod errors;
mod file;
mod memory;

pub use errors::{SlotError, SlotResult};
pub use file::FileSlot;
pub use memory::MemorySlot;

use std::future::Future;

/// Async key-value storage for serialized blobs.
///
/// `read` returns `Ok(None)` when nothing has been stored under `key` yet.
/// `write` must only return `Ok` once the value is durable; a failed write
/// must leave the previous value readable.
pub trait Slot {
    fn read(&self, key: &str) -> impl Future<Output = SlotResult<Option<String>>> + Send;

    fn write(&self, key: &str, value: &str) -> impl Future<Output = SlotResult<()>> + Send;
}

/// Checks that `key` can name a slot on every backend.
///
/// Keys are non-empty and limited to ASCII letters, digits, `_` and `-`.
pub fn validate_key(key: &str) -> SlotResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(SlotError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key_is_valid() {
        assert!(validate_key("products").is_ok());
        assert!(validate_key("stock_v-2").is_ok());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        for key in ["", "../products", "a/b", "products.json", "prod ucts"] {
            assert!(
                matches!(validate_key(key), Err(SlotError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
