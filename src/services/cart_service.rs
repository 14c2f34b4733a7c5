use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CartLineItem, Product, Topping, ToppingSnapshot},
    state::Catalog,
    storage::CartStorage,
};

/// The cart: an insertion-ordered list of line items mirrored to a single
/// durable storage slot. Every mutation writes the slot synchronously
/// before returning, so a reload at any point observes a consistent cart.
pub struct CartStore {
    items: Vec<CartLineItem>,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        Self {
            items: Vec::new(),
            storage,
        }
    }

    /// Rebuild the cart from the durable slot. An absent or malformed
    /// payload yields an empty cart, never an error.
    pub fn restore(storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.read() {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "discarding malformed cart payload");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };
        Self { items, storage }
    }

    /// Append a new line item and return its id. The requested quantity is
    /// clamped into `[1, max_order]`; toppings are snapshot-copied so later
    /// catalog edits cannot reach into the cart. A zero `max_order` counts
    /// as no cap, so the stored qty never drops below 1.
    pub fn add(&mut self, product: &Product, qty: u32, toppings: &[Topping]) -> AppResult<Uuid> {
        let mut qty = qty.max(1);
        if let Some(max) = product.max_order.filter(|max| *max > 0) {
            qty = qty.min(max);
        }

        let item = CartLineItem {
            id: Uuid::new_v4(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            qty,
            toppings: toppings.iter().map(ToppingSnapshot::from).collect(),
            created_at: Utc::now(),
        };
        let id = item.id;
        self.items.push(item);
        self.persist()?;
        Ok(id)
    }

    /// Remove a line item. Removing an id that is not present is a no-op,
    /// not an error.
    pub fn remove(&mut self, id: Uuid) -> AppResult<()> {
        self.items.retain(|item| item.id != id);
        self.persist()
    }

    /// Apply a quantity delta to a line item. Dropping below 1 removes the
    /// item. Exceeding the product's `max_order` rejects the change outright
    /// with no mutation and no storage write; this is deliberately different
    /// from `add`, which saturates. When the owning product no longer
    /// resolves in the catalog the cap check is skipped.
    pub fn change_qty(&mut self, id: Uuid, delta: i32, catalog: &Catalog) -> AppResult<()> {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return Ok(());
        };

        let new_qty = i64::from(self.items[pos].qty) + i64::from(delta);
        if new_qty < 1 {
            self.items.remove(pos);
            return self.persist();
        }

        if let Some(max) = catalog
            .product(&self.items[pos].product_id)
            .and_then(|p| p.max_order)
            .filter(|max| *max > 0)
        {
            if new_qty > i64::from(max) {
                return Ok(());
            }
        }

        self.items[pos].qty = u32::try_from(new_qty).unwrap_or(u32::MAX);
        self.persist()
    }

    /// Grand total over all line items, in minor currency units.
    pub fn total(&self) -> i64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total unit count across line items, shown on the cart badge.
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.items.clear();
        self.persist()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> AppResult<()> {
        let payload = serde_json::to_string(&self.items)?;
        self.storage.write(&payload)
    }
}
