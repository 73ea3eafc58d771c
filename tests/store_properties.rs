//! Inventory Store Property Tests
//!
//! Covers:
//! - Empty or absent slot loads as an empty collection
//! - Inserts grow the collection by one with unique ids
//! - Edits replace in place, keeping id and position
//! - Removes drop exactly the named record; absent ids are a no-op
//! - The Rice scenario end to end

use std::collections::HashSet;

use stockbook::{InventoryStore, MemorySlot, ProductDraft, ProductId, SequentialIds};

// =============================================================================
// Test Utilities
// =============================================================================

fn draft(name: &str) -> ProductDraft {
    ProductDraft::new(name, "Pantry", "1", "2030-12-31")
}

fn memory_store() -> (InventoryStore<MemorySlot, SequentialIds>, MemorySlot) {
    let slot = MemorySlot::new();
    (InventoryStore::new(slot.clone(), SequentialIds::new()), slot)
}

fn ids_of(store: &InventoryStore<MemorySlot, SequentialIds>) -> Vec<String> {
    store
        .products()
        .iter()
        .map(|product| product.id.to_string())
        .collect()
}

// =============================================================================
// Load
// =============================================================================

#[tokio::test]
async fn test_absent_slot_loads_empty() {
    let (mut store, _) = memory_store();
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_slot_loads_empty() {
    for blob in ["", "[]"] {
        let slot = MemorySlot::with_entry("products", blob);
        let mut store = InventoryStore::new(slot, SequentialIds::new());
        assert!(store.load().await.unwrap().is_empty(), "blob {:?}", blob);
    }
}

#[tokio::test]
async fn test_whitespace_slot_is_read_error() {
    let slot = MemorySlot::with_entry("products", "   ");
    let mut store = InventoryStore::new(slot, SequentialIds::new());

    assert!(store.load().await.unwrap_err().is_read_error());
    assert!(!store.is_loaded());
}

// =============================================================================
// Insert
// =============================================================================

#[tokio::test]
async fn test_inserts_grow_by_one_with_unique_ids() {
    let (mut store, _) = memory_store();
    store.load().await.unwrap();

    for n in 1..=25 {
        let len = store.upsert(draft(&format!("item{}", n)), None).await.unwrap().len();
        assert_eq!(len, n);
    }

    let unique: HashSet<_> = store.products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(unique.len(), 25);
}

#[tokio::test]
async fn test_inserts_append_in_order() {
    let (mut store, _) = memory_store();
    for name in ["Rice", "Beans", "Flour"] {
        store.upsert(draft(name), None).await.unwrap();
    }

    let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Rice", "Beans", "Flour"]);
}

#[tokio::test]
async fn test_stuck_generator_still_yields_unique_ids() {
    let slot = MemorySlot::new();
    let mut calls = 0u32;
    // Repeats each id twice before moving on
    let ids = move || {
        calls += 1;
        ProductId::new(((calls + 1) / 2).to_string())
    };
    let mut store = InventoryStore::new(slot, ids);

    for name in ["a", "b", "c"] {
        store.upsert(draft(name), None).await.unwrap();
    }

    let unique: HashSet<_> = store.products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(unique.len(), 3);
}

// =============================================================================
// Edit
// =============================================================================

#[tokio::test]
async fn test_edit_replaces_in_place() {
    let (mut store, _) = memory_store();
    for name in ["Rice", "Beans", "Flour"] {
        store.upsert(draft(name), None).await.unwrap();
    }
    let before = ids_of(&store);
    let middle = ProductId::new(before[1].clone());

    let products = store
        .upsert(ProductDraft::new("Black beans", "Legume", "7", "2031-01-01"), Some(&middle))
        .await
        .unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[1].id, middle);
    assert_eq!(products[1].name, "Black beans");
    assert_eq!(products[1].category, "Legume");
    assert_eq!(products[1].quantity, "7");
    assert_eq!(products[1].expiry_date, "2031-01-01");
    assert_eq!(products[0].name, "Rice");
    assert_eq!(products[2].name, "Flour");
    assert_eq!(ids_of(&store), before);
}

// =============================================================================
// Remove
// =============================================================================

#[tokio::test]
async fn test_remove_present_id() {
    let (mut store, _) = memory_store();
    for name in ["Rice", "Beans", "Flour"] {
        store.upsert(draft(name), None).await.unwrap();
    }
    let target = store.products()[0].id.clone();

    let products = store.remove(&target).await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id != target));
    assert_eq!(products[0].name, "Beans");
}

#[tokio::test]
async fn test_remove_absent_id_is_noop() {
    let (mut store, slot) = memory_store();
    for name in ["Rice", "Beans"] {
        store.upsert(draft(name), None).await.unwrap();
    }
    let before = store.products().to_vec();
    let blob_before = slot.get("products");

    let products = store.remove(&ProductId::new("missing")).await.unwrap();
    assert_eq!(products, before.as_slice());
    assert_eq!(slot.get("products"), blob_before);
}

// =============================================================================
// Scenario
// =============================================================================

#[tokio::test]
async fn test_rice_scenario() {
    let (mut store, slot) = memory_store();
    assert!(store.load().await.unwrap().is_empty());

    let products = store
        .upsert(ProductDraft::new("Rice", "Grain", "10", "2025-01-01"), None)
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    let id = products[0].id.clone();
    assert!(!id.as_str().is_empty());

    let products = store
        .upsert(ProductDraft::new("Rice", "Grain", "5", "2025-01-01"), Some(&id))
        .await
        .unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, id);
    assert_eq!(products[0].quantity, "5");

    assert!(store.remove(&id).await.unwrap().is_empty());
    assert_eq!(slot.get("products").as_deref(), Some("[]"));
}

// =============================================================================
// Round trip
// =============================================================================

#[tokio::test]
async fn test_reload_sees_persisted_collection() {
    let (mut store, slot) = memory_store();
    for name in ["Rice", "Beans \"dry\"", "Açúcar"] {
        store.upsert(draft(name), None).await.unwrap();
    }
    let persisted = store.products().to_vec();

    let mut reopened = InventoryStore::new(slot, SequentialIds::new());
    assert_eq!(reopened.load().await.unwrap(), persisted.as_slice());
}
