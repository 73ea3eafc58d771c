//! The inventory store proper.

use crate::codec;
use crate::ids::IdGenerator;
use crate::observability::{log_event, Event};
use crate::product::{Product, ProductDraft, ProductId};
use crate::slot::Slot;

use super::errors::{StoreError, StoreResult};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "products";

/// Generator calls per insert before giving up on a fresh id.
pub const MAX_ID_ATTEMPTS: u32 = 64;

/// Ordered product collection written through to a durable slot.
///
/// The collection starts empty and not loaded. `upsert` and `remove` load
/// it first if `load` has not succeeded yet, so a mutation never overwrites
/// stored data the store has not seen.
pub struct InventoryStore<S, G> {
    slot: S,
    ids: G,
    key: String,
    products: Vec<Product>,
    loaded: bool,
}

impl<S: Slot, G: IdGenerator> InventoryStore<S, G> {
    /// Create a store over `slot` using [`DEFAULT_SLOT_KEY`].
    pub fn new(slot: S, ids: G) -> Self {
        Self::with_key(slot, ids, DEFAULT_SLOT_KEY)
    }

    /// Create a store over `slot` under a custom key.
    pub fn with_key(slot: S, ids: G, key: impl Into<String>) -> Self {
        Self {
            slot,
            ids,
            key: key.into(),
            products: Vec::new(),
            loaded: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Current in-memory collection, in stored order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product, e.g. to prefill an edit form.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Reads the slot and replaces the in-memory collection with its contents.
    ///
    /// An absent slot or an empty blob loads as an empty collection.
    ///
    /// # Errors
    ///
    /// `PersistenceRead` if the slot cannot be read or its contents are not
    /// a product array. The in-memory collection is left as it was.
    pub async fn load(&mut self) -> StoreResult<&[Product]> {
        log_event(Event::StoreLoadBegin, &[("key", self.key.as_str())]);

        let products = match self.read_slot().await {
            Ok(products) => products,
            Err(e) => {
                let reason = e.to_string();
                log_event(
                    Event::StoreLoadFailed,
                    &[("error", reason.as_str()), ("key", self.key.as_str())],
                );
                return Err(e);
            }
        };

        self.products = products;
        self.loaded = true;

        let count = self.products.len().to_string();
        log_event(
            Event::StoreLoaded,
            &[("count", count.as_str()), ("key", self.key.as_str())],
        );
        Ok(&self.products)
    }

    /// Inserts a new product or replaces an existing one.
    ///
    /// Without `editing_id` the draft gets a fresh id and is appended. With
    /// `editing_id` every record carrying that id is replaced in place and
    /// keeps its id; if no record carries it the collection is unchanged.
    /// Either way the resulting collection is persisted before it becomes
    /// visible.
    ///
    /// # Errors
    ///
    /// `PersistenceWrite` if the slot write fails, `PersistenceRead` if an
    /// implicit first load fails, `IdExhausted` if the generator keeps
    /// returning ids already in use. The in-memory collection is unchanged.
    pub async fn upsert(
        &mut self,
        candidate: ProductDraft,
        editing_id: Option<&ProductId>,
    ) -> StoreResult<&[Product]> {
        self.ensure_loaded().await?;

        let mut next = self.products.clone();
        let (event, id) = match editing_id {
            Some(id) => {
                let mut replaced = false;
                for existing in next.iter_mut().filter(|product| &product.id == id) {
                    *existing = Product::from_draft(id.clone(), candidate.clone());
                    replaced = true;
                }
                if replaced {
                    (Event::ProductUpdated, id.clone())
                } else {
                    (Event::ProductEditTargetMissing, id.clone())
                }
            }
            None => {
                let id = self.fresh_id()?;
                next.push(Product::from_draft(id.clone(), candidate));
                (Event::ProductAdded, id)
            }
        };

        self.commit(next).await?;

        log_event(event, &[("id", id.as_str()), ("key", self.key.as_str())]);
        Ok(&self.products)
    }

    /// Removes the product with `id`. Removing an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Same contract as [`upsert`](Self::upsert).
    pub async fn remove(&mut self, id: &ProductId) -> StoreResult<&[Product]> {
        self.ensure_loaded().await?;

        let next: Vec<Product> = self
            .products
            .iter()
            .filter(|product| &product.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.products.len();

        self.commit(next).await?;

        if removed {
            log_event(
                Event::ProductRemoved,
                &[("id", id.as_str()), ("key", self.key.as_str())],
            );
        }
        Ok(&self.products)
    }

    async fn ensure_loaded(&mut self) -> StoreResult<()> {
        if !self.loaded {
            self.load().await?;
        }
        Ok(())
    }

    async fn read_slot(&self) -> StoreResult<Vec<Product>> {
        let blob = self
            .slot
            .read(&self.key)
            .await
            .map_err(|e| StoreError::read(&self.key, e))?;

        match blob {
            Some(blob) => codec::decode(&blob).map_err(|e| StoreError::read(&self.key, e)),
            None => Ok(Vec::new()),
        }
    }

    /// Persists `next`, then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<Product>) -> StoreResult<()> {
        if let Err(e) = self.write_slot(&next).await {
            let reason = e.to_string();
            log_event(
                Event::StoreWriteFailed,
                &[("error", reason.as_str()), ("key", self.key.as_str())],
            );
            return Err(e);
        }

        self.products = next;
        Ok(())
    }

    async fn write_slot(&self, products: &[Product]) -> StoreResult<()> {
        let blob = codec::encode(products).map_err(|e| StoreError::write(&self.key, e))?;
        self.slot
            .write(&self.key, &blob)
            .await
            .map_err(|e| StoreError::write(&self.key, e))
    }

    fn fresh_id(&mut self) -> StoreResult<ProductId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate_unique_id();
            if !self.products.iter().any(|product| product.id == id) {
                return Ok(id);
            }
        }

        let attempts = MAX_ID_ATTEMPTS.to_string();
        log_event(
            Event::IdGenerationExhausted,
            &[("attempts", attempts.as_str()), ("key", self.key.as_str())],
        );
        Err(StoreError::IdExhausted {
            key: self.key.clone(),
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
