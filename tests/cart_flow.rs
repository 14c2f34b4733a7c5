use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use storefront_engine::{
    error::AppResult,
    models::{Product, StoreConfig, Topping},
    services::cart_service::CartStore,
    state::{AppState, Catalog, ProductSelection},
    storage::{CartStorage, FileStorage, MemoryStorage},
};

fn product(id: &str, price: i64, max_order: Option<u32>) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: String::new(),
        price,
        category: String::new(),
        image: String::new(),
        topping_ids: vec!["t1".into()],
        max_order,
    }
}

fn topping(id: &str, price: i64) -> Topping {
    Topping {
        id: id.to_string(),
        name: format!("Topping {id}"),
        price,
    }
}

fn catalog(products: Vec<Product>) -> Catalog {
    Catalog {
        products,
        toppings: vec![topping("t1", 5000)],
        store: StoreConfig::default(),
    }
}

/// Storage wrapper that counts writes, to pin down which mutations persist.
#[derive(Default)]
struct CountingStorage {
    slot: Mutex<Option<String>>,
    writes: Arc<AtomicUsize>,
}

impl CartStorage for CountingStorage {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn write(&self, payload: &str) -> AppResult<()> {
        *self.slot.lock().unwrap() = Some(payload.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn add_clamps_quantity_by_saturation() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let capped = product("a", 1000, Some(10));
    let uncapped = product("b", 1000, None);

    cart.add(&capped, 99, &[])?;
    cart.add(&capped, 0, &[])?;
    cart.add(&uncapped, 42, &[])?;

    let quantities: Vec<u32> = cart.items().iter().map(|i| i.qty).collect();
    assert_eq!(quantities, vec![10, 1, 42]);
    Ok(())
}

#[test]
fn change_qty_rejects_above_max_without_persisting() -> anyhow::Result<()> {
    let writes = Arc::new(AtomicUsize::new(0));
    let storage = CountingStorage {
        slot: Mutex::new(None),
        writes: Arc::clone(&writes),
    };
    let mut cart = CartStore::new(Box::new(storage));

    let p = product("a", 25000, Some(2));
    let cat = catalog(vec![p.clone()]);
    let id = cart.add(&p, 2, &[])?;
    let writes_after_add = writes.load(Ordering::SeqCst);

    cart.change_qty(id, 1, &cat)?;

    assert_eq!(cart.items()[0].qty, 2, "over-cap change must be rejected");
    assert_eq!(
        writes.load(Ordering::SeqCst),
        writes_after_add,
        "rejected change must not write storage"
    );
    Ok(())
}

#[test]
fn zero_max_order_counts_as_no_cap() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("a", 1000, Some(0));
    let cat = catalog(vec![p.clone()]);

    let id = cart.add(&p, 3, &[])?;
    assert_eq!(cart.items()[0].qty, 3, "zero cap must not clamp the add");

    cart.change_qty(id, 1, &cat)?;
    assert_eq!(cart.items()[0].qty, 4, "zero cap must not reject changes");

    let mut selection = ProductSelection::new(p);
    selection.adjust_qty(5);
    assert_eq!(selection.qty, 6);
    selection.adjust_qty(-10);
    assert_eq!(selection.qty, 1);
    Ok(())
}

#[test]
fn change_qty_saturates_instead_of_wrapping() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("a", 1000, None);
    let id = cart.add(&p, u32::MAX, &[])?;

    cart.change_qty(id, 1, &catalog(vec![p]))?;

    assert_eq!(cart.len(), 1, "item must survive an over-range change");
    assert_eq!(cart.items()[0].qty, u32::MAX);
    Ok(())
}

#[test]
fn change_qty_below_one_removes_the_item() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("a", 1000, None);
    let cat = catalog(vec![p.clone()]);

    let keep = cart.add(&p, 2, &[])?;
    let doomed = cart.add(&p, 1, &[])?;
    assert_eq!(cart.len(), 2);

    cart.change_qty(doomed, -1, &cat)?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, keep);
    Ok(())
}

#[test]
fn change_qty_skips_cap_when_product_left_the_catalog() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("gone", 1000, Some(2));
    let id = cart.add(&p, 2, &[])?;

    // Catalog no longer contains the product, so the cap is unenforceable.
    cart.change_qty(id, 1, &catalog(vec![]))?;

    assert_eq!(cart.items()[0].qty, 3);
    Ok(())
}

#[test]
fn total_is_exact_integer_arithmetic() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let a = product("a", 25000, None);
    let b = product("b", 28000, None);
    let cat = catalog(vec![a.clone(), b.clone()]);

    let a_id = cart.add(&a, 2, &[topping("t1", 5000)])?;
    cart.add(&b, 3, &[])?;
    assert_eq!(cart.total(), (25000 + 5000) * 2 + 28000 * 3);

    cart.change_qty(a_id, -1, &cat)?;
    assert_eq!(cart.total(), (25000 + 5000) + 28000 * 3);

    cart.remove(a_id)?;
    assert_eq!(cart.total(), 28000 * 3);
    Ok(())
}

#[test]
fn remove_of_unknown_id_is_a_noop() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("a", 1000, None);
    let id = cart.add(&p, 1, &[])?;

    cart.remove(uuid::Uuid::new_v4())?;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id, id);
    Ok(())
}

#[test]
fn persisted_cart_survives_a_reload() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cart.json");

    let mut cart = CartStore::restore(Box::new(FileStorage::new(&path)));
    let p = product("a", 25000, Some(10));
    cart.add(&p, 2, &[topping("t1", 5000)])?;
    cart.add(&product("b", 28000, None), 1, &[])?;
    let before = cart.items().to_vec();

    let restored = CartStore::restore(Box::new(FileStorage::new(&path)));
    assert_eq!(restored.items(), before.as_slice());
    assert_eq!(restored.total(), cart.total());
    Ok(())
}

#[test]
fn malformed_or_missing_storage_restores_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = CartStore::restore(Box::new(FileStorage::new(dir.path().join("none.json"))));
    assert!(missing.is_empty());

    let path = dir.path().join("cart.json");
    std::fs::write(&path, "{ not json")?;
    let malformed = CartStore::restore(Box::new(FileStorage::new(&path)));
    assert!(malformed.is_empty());
    Ok(())
}

#[test]
fn topping_snapshots_are_frozen_copies() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let p = product("a", 25000, None);
    let mut t = topping("t1", 5000);

    cart.add(&p, 1, &[t.clone()])?;

    // A later catalog price change must not reach items already in the cart.
    t.price = 9000;
    t.name = "Renamed".into();

    let snapshot = &cart.items()[0].toppings[0];
    assert_eq!(snapshot.price, 5000);
    assert_eq!(snapshot.name, "Topping t1");
    assert_eq!(cart.total(), 30000);
    Ok(())
}

#[test]
fn example_scenario_totals() -> anyhow::Result<()> {
    let mut cart = CartStore::new(Box::<MemoryStorage>::default());
    let a = product("a", 25000, Some(2));
    let cat = catalog(vec![a.clone()]);

    let id = cart.add(&a, 2, &[topping("x", 5000)])?;
    assert_eq!(cart.total(), 60000);

    cart.change_qty(id, 1, &cat)?;
    assert_eq!(cart.items()[0].qty, 2);
    assert_eq!(cart.total(), 60000);

    cart.remove(id)?;
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0);
    Ok(())
}

#[test]
fn selection_clamps_and_is_discarded_unless_confirmed() -> anyhow::Result<()> {
    let p = product("a", 25000, Some(3));
    let cat = catalog(vec![p.clone()]);
    let cart = CartStore::new(Box::<MemoryStorage>::default());
    let mut state = AppState::new(cat, Default::default(), cart);

    assert!(!state.open_product("unknown"));
    assert!(state.selection.is_none());

    assert!(state.open_product("a"));
    {
        let selection = state.selection.as_mut().unwrap();
        selection.adjust_qty(10);
        assert_eq!(selection.qty, 3);
        selection.adjust_qty(-10);
        assert_eq!(selection.qty, 1);
    }

    // Closing the view drops the selection without touching the cart.
    state.close_selection();
    assert!(state.cart.is_empty());

    state.open_product("a");
    let t = topping("t1", 5000);
    {
        let selection = state.selection.as_mut().unwrap();
        selection.toggle_topping(&t);
        selection.adjust_qty(1);
        assert_eq!(selection.total(), (25000 + 5000) * 2);
        selection.toggle_topping(&t);
        selection.toggle_topping(&t);
        assert_eq!(selection.toppings.len(), 1);
    }

    let id = state.add_selection_to_cart()?;
    assert!(id.is_some());
    assert!(state.selection.is_none());
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart.items()[0].qty, 2);
    assert_eq!(state.cart.items()[0].toppings[0].price, 5000);

    // No open view: confirming is a no-op.
    assert!(state.add_selection_to_cart()?.is_none());
    Ok(())
}

#[test]
fn selection_total_mirrors_cart_line_total() {
    let p = product("a", 25000, None);
    let mut selection = ProductSelection::new(p);
    selection.toggle_topping(&topping("t1", 5000));
    selection.adjust_qty(1);
    assert_eq!(selection.total(), 60000);
}
