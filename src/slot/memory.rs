//! # In-Memory Slot
//!
//! Clones share the same map, so a test can hand one clone to a store and
//! keep another to inspect contents or inject failures.

use std::collections::HashMap;
use std::future::{self, Future};
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::{SlotError, SlotResult};
use super::Slot;

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: u64,
}

/// Slot held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Arc<Mutex<MemoryState>>,
}

impl MemorySlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `value` under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.insert(key, value);
        slot
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the stored value without going through the async API
    pub fn get(&self, key: &str) -> Option<String> {
        self.state().entries.get(key).cloned()
    }

    /// Stores a value directly, bypassing failure injection
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.state().entries.insert(key.into(), value.into());
    }

    /// Makes every subsequent `read` fail until reset
    pub fn set_fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    /// Makes every subsequent `write` fail until reset
    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> u64 {
        self.state().writes
    }
}

impl MemorySlot {
    fn read_now(&self, key: &str) -> SlotResult<Option<String>> {
        let state = self.state();
        if state.fail_reads {
            return Err(SlotError::Unavailable {
                key: key.to_string(),
                reason: "read failure injected".to_string(),
            });
        }
        Ok(state.entries.get(key).cloned())
    }

    fn write_now(&self, key: &str, value: &str) -> SlotResult<()> {
        let mut state = self.state();
        if state.fail_writes {
            return Err(SlotError::Unavailable {
                key: key.to_string(),
                reason: "write failure injected".to_string(),
            });
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> impl Future<Output = SlotResult<Option<String>>> + Send {
        future::ready(self.read_now(key))
    }

    fn write(&self, key: &str, value: &str) -> impl Future<Output = SlotResult<()>> + Send {
        future::ready(self.write_now(key, value))
    }
}
