//! Collection codec
//!
//! The slot holds the full product sequence as a JSON array of objects with
//! string fields `id`, `name`, `category`, `quantity`, `expiryDate`. There is
//! no version header; the array is the whole format.

use thiserror::Error;

use crate::product::Product;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed product data: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode products: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serializes the collection in order.
pub fn encode(products: &[Product]) -> Result<String, CodecError> {
    serde_json::to_string(products).map_err(CodecError::Encode)
}

/// Parses a stored blob.
///
/// An empty blob is an empty collection. Anything else, whitespace
/// included, must be a JSON array of product objects; unknown fields are
/// ignored.
pub fn decode(blob: &str) -> Result<Vec<Product>, CodecError> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob).map_err(CodecError::Decode)
}
