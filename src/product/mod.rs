//! Product records
//!
//! A [`Product`] is one inventory line. All fields are free text; quantity
//! stays a string because callers type it into a form and nothing downstream
//! does arithmetic on it.

mod draft;

pub use draft::{DraftError, ProductDraft};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque product identifier.
///
/// Assigned once by the store, never changed and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wraps an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One inventory record as stored in the durable slot.
///
/// Field order and names match the stored JSON objects:
/// `id`, `name`, `category`, `quantity`, `expiryDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub expiry_date: String,
}

impl Product {
    /// Builds a record from a draft and the id the store chose for it.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            expiry_date: draft.expiry_date,
        }
    }

    /// Copies the editable fields back into a draft, e.g. to prefill an
    /// edit form.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity.clone(),
            expiry_date: self.expiry_date.clone(),
        }
    }

    /// One-line listing text: `name - category - quantity - expiryDate`.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - {} - {}",
            self.name, self.category, self.quantity, self.expiry_date
        )
    }
}
