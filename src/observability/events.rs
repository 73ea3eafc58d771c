//! Observable store events
//!
//! Events are explicit and typed; each carries a fixed severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in stockbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file read and validated
    ConfigLoaded,

    // Load
    /// Slot read begins
    StoreLoadBegin,
    /// Collection loaded into memory
    StoreLoaded,
    /// Slot unreadable or contents unparsable
    StoreLoadFailed,

    // Mutations
    /// New product appended
    ProductAdded,
    /// Existing product replaced in place
    ProductUpdated,
    /// Edit named an id that is not in the collection
    ProductEditTargetMissing,
    /// Product removed
    ProductRemoved,
    /// Id generator produced only ids already in use
    IdGenerationExhausted,
    /// Durable write failed, in-memory collection kept
    StoreWriteFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreLoadBegin => "STORE_LOAD_BEGIN",
            Event::StoreLoaded => "STORE_LOADED",
            Event::StoreLoadFailed => "STORE_LOAD_FAILED",
            Event::ProductAdded => "PRODUCT_ADDED",
            Event::ProductUpdated => "PRODUCT_UPDATED",
            Event::ProductEditTargetMissing => "PRODUCT_EDIT_TARGET_MISSING",
            Event::ProductRemoved => "PRODUCT_REMOVED",
            Event::IdGenerationExhausted => "ID_GENERATION_EXHAUSTED",
            Event::StoreWriteFailed => "STORE_WRITE_FAILED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreLoadBegin => Severity::Trace,
            Event::ProductEditTargetMissing => Severity::Warn,
            Event::StoreLoadFailed | Event::StoreWriteFailed | Event::IdGenerationExhausted => {
                Severity::Error
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_errors() {
        assert_eq!(Event::StoreLoadFailed.severity(), Severity::Error);
        assert_eq!(Event::StoreWriteFailed.severity(), Severity::Error);
        assert_eq!(Event::ProductAdded.severity(), Severity::Info);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StoreLoaded.to_string(), "STORE_LOADED");
        assert_eq!(Event::ProductEditTargetMissing.as_str(), "PRODUCT_EDIT_TARGET_MISSING");
    }
}
