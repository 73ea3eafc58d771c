//! stockbook - A single-device inventory store
//!
//! Products (name, category, quantity, expiry date) live in one ordered
//! collection owned by [`InventoryStore`]. Every mutation is written through
//! to a durable key-value slot as one JSON blob before the in-memory view
//! changes.

pub mod codec;
pub mod config;
pub mod ids;
pub mod observability;
pub mod product;
pub mod slot;
pub mod store;

pub use config::{ConfigError, StoreConfig};
pub use ids::{ClockIds, IdGenerator, RandomIds, SequentialIds};
pub use product::{DraftError, Product, ProductDraft, ProductId};
pub use slot::{FileSlot, MemorySlot, Slot, SlotError};
pub use store::{InventoryStore, StoreError, StoreResult, DEFAULT_SLOT_KEY, MAX_ID_ATTEMPTS};
