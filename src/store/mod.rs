//! Inventory store
//!
//! The store is the only owner of the product collection. Each mutation
//! builds the next collection, writes it to the slot, and only then swaps
//! it into memory. A failed write leaves both copies as they were.
//!
//! Operations take `&mut self` and are awaited to completion, so two
//! operations can never be in flight against the same slot.

mod errors;
mod inventory;

pub use errors::{PersistenceFailure, StoreError, StoreResult};
pub use inventory::{InventoryStore, DEFAULT_SLOT_KEY, MAX_ID_ATTEMPTS};
