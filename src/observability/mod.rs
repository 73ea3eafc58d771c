//! Observability for stockbook
//!
//! Structured JSON log lines for store lifecycle events. Logging is
//! read-only: it never changes an operation's result.
//!
//! # Usage
//!
//! ```ignore
//! use stockbook::observability::{log_event, Event};
//!
//! log_event(Event::StoreLoaded, &[("count", "3"), ("key", "products")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
