use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{LandingContent, Product, StoreConfig, Topping},
    services::cart_service::CartStore,
};

/// Immutable catalog data for one session. Loaded once at startup; the
/// cart only ever reads from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub toppings: Vec<Topping>,
    pub store: StoreConfig,
}

impl Catalog {
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn topping(&self, id: &str) -> Option<&Topping> {
        self.toppings.iter().find(|t| t.id == id)
    }

    /// Toppings selectable for a product, in catalog order.
    pub fn product_toppings(&self, product: &Product) -> Vec<&Topping> {
        self.toppings
            .iter()
            .filter(|t| product.topping_ids.iter().any(|id| *id == t.id))
            .collect()
    }
}

/// Transient selection state for one open product-detail view. Discarded
/// on close; merged into the cart only on an explicit add.
#[derive(Debug, Clone)]
pub struct ProductSelection {
    pub product: Product,
    pub qty: u32,
    pub toppings: Vec<Topping>,
}

impl ProductSelection {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            qty: 1,
            toppings: Vec::new(),
        }
    }

    /// Adjust the quantity by `delta`, saturating into `[1, max_order]`.
    /// A zero `max_order` counts as no cap.
    pub fn adjust_qty(&mut self, delta: i32) {
        let mut qty = i64::from(self.qty) + i64::from(delta);
        if qty < 1 {
            qty = 1;
        }
        if let Some(max) = self.product.max_order.filter(|max| *max > 0) {
            qty = qty.min(i64::from(max));
        }
        self.qty = u32::try_from(qty).unwrap_or(u32::MAX);
    }

    /// Add the topping if it is not selected yet, remove it otherwise.
    pub fn toggle_topping(&mut self, topping: &Topping) {
        if let Some(pos) = self.toppings.iter().position(|t| t.id == topping.id) {
            self.toppings.remove(pos);
        } else {
            self.toppings.push(topping.clone());
        }
    }

    pub fn toppings_price(&self) -> i64 {
        self.toppings.iter().map(|t| t.price).sum()
    }

    /// Running total shown on the add-to-order button.
    pub fn total(&self) -> i64 {
        (self.product.price + self.toppings_price()) * i64::from(self.qty)
    }
}

pub struct AppState {
    pub catalog: Catalog,
    pub landing: LandingContent,
    pub cart: CartStore,
    pub selection: Option<ProductSelection>,
}

impl AppState {
    pub fn new(catalog: Catalog, landing: LandingContent, cart: CartStore) -> Self {
        Self {
            catalog,
            landing,
            cart,
            selection: None,
        }
    }

    /// Open the detail view for a product. Returns false when the id does
    /// not resolve, leaving any current selection in place.
    pub fn open_product(&mut self, product_id: &str) -> bool {
        match self.catalog.product(product_id) {
            Some(product) => {
                self.selection = Some(ProductSelection::new(product.clone()));
                true
            }
            None => false,
        }
    }

    pub fn close_selection(&mut self) {
        self.selection = None;
    }

    /// Confirm the open selection into the cart. Returns the new line item
    /// id, or `None` when no detail view is open.
    pub fn add_selection_to_cart(&mut self) -> AppResult<Option<Uuid>> {
        let Some(selection) = self.selection.take() else {
            return Ok(None);
        };
        let id = self
            .cart
            .add(&selection.product, selection.qty, &selection.toppings)?;
        Ok(Some(id))
    }
}
