//! Product id generation
//!
//! The store asks an [`IdGenerator`] for a fresh id on every insert. The
//! default, [`ClockIds`], produces millisecond timestamps; tests use
//! [`SequentialIds`] or a closure for deterministic ids.

use chrono::Utc;
use uuid::Uuid;

use crate::product::ProductId;

/// Source of fresh product ids.
///
/// The store skips ids already present in its collection and asks again,
/// up to `MAX_ID_ATTEMPTS` times per insert before failing with
/// `StoreError::IdExhausted`.
pub trait IdGenerator {
    fn generate_unique_id(&mut self) -> ProductId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> ProductId,
{
    fn generate_unique_id(&mut self) -> ProductId {
        self()
    }
}

/// Millisecond Unix timestamps as decimal strings.
///
/// When the clock has not advanced since the previous id (or went
/// backwards) the previous value plus one is used instead.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: i64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start as if `millis` had already been issued
    pub fn starting_after(millis: i64) -> Self {
        Self { last: millis }
    }

    fn next_millis(&mut self, now: i64) -> i64 {
        let next = if now > self.last {
            now
        } else {
            self.last.saturating_add(1)
        };
        self.last = next;
        next
    }
}

impl IdGenerator for ClockIds {
    fn generate_unique_id(&mut self) -> ProductId {
        let millis = self.next_millis(Utc::now().timestamp_millis());
        ProductId::new(millis.to_string())
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate_unique_id(&mut self) -> ProductId {
        ProductId::new(Uuid::new_v4().to_string())
    }
}

/// Counting ids: `"1"`, `"2"`, ...
///
/// Stops advancing at `u64::MAX`; the store then reports exhaustion.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn generate_unique_id(&mut self) -> ProductId {
        let id = ProductId::new(self.next.to_string());
        self.next = self.next.saturating_add(1);
        id
    }
}
