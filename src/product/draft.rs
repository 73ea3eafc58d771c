//! Caller-side product drafts
//!
//! A draft is what a form collects before the store assigns an id. The
//! store accepts drafts as they are; [`ProductDraft::check`] is the
//! presence check a form applies before calling it.

use thiserror::Error;

/// Editable product fields without an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub expiry_date: String,
}

/// Draft check failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("required field is blank: {0}")]
    MissingField(&'static str),
}

impl ProductDraft {
    /// Create a draft from its four fields
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            expiry_date: expiry_date.into(),
        }
    }

    /// Reports the first blank field, in form order.
    ///
    /// Only the empty string is blank; whitespace counts as content. Content
    /// is not otherwise inspected: quantity is not parsed and expiry date is
    /// not validated as a date.
    pub fn check(&self) -> Result<(), DraftError> {
        let fields = [
            ("name", &self.name),
            ("category", &self.category),
            ("quantity", &self.quantity),
            ("expiryDate", &self.expiry_date),
        ];

        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(DraftError::MissingField(*field)),
            None => Ok(()),
        }
    }
}
