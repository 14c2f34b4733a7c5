use crate::{
    config::AppConfig,
    error::AppResult,
    models::{Product, StoreConfig, Topping},
    services::fetch_json,
    state::Catalog,
};

/// Load the catalog, falling back to the built-in demo dataset when any of
/// the three fetches fails. The fallback is all-or-nothing: the UI never
/// renders a mix of live and demo data.
pub async fn load(client: &reqwest::Client, config: &AppConfig) -> Catalog {
    match try_fetch_all(client, config).await {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!(error = %err, "catalog fetch failed, using built-in demo data");
            demo_catalog()
        }
    }
}

/// Fetch products, toppings and store config concurrently. Succeeds only
/// when all three resolve with a success status.
pub async fn try_fetch_all(client: &reqwest::Client, config: &AppConfig) -> AppResult<Catalog> {
    let products_url = config.products_url();
    let toppings_url = config.toppings_url();
    let store_url = config.store_url();
    let (products, toppings, store) = tokio::try_join!(
        fetch_json::<Vec<Product>>(client, &products_url, "products"),
        fetch_json::<Vec<Topping>>(client, &toppings_url, "toppings"),
        fetch_json::<StoreConfig>(client, &store_url, "store config"),
    )?;
    Ok(Catalog {
        products,
        toppings,
        store,
    })
}

/// Fixed demo dataset. Internally consistent: every topping id referenced
/// by a product exists in the topping list.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        Product {
            id: "1".into(),
            name: "Classic Choco Walnut".into(),
            description: "Our signature soft cookie with belgian dark chocolate and roasted walnuts. Melted perfection.".into(),
            price: 25000,
            category: "Best Seller".into(),
            image: "https://images.unsplash.com/photo-1499636138143-bd649043ea52?q=80&w=800&auto=format&fit=crop".into(),
            topping_ids: vec!["1".into(), "2".into()],
            max_order: Some(10),
        },
        Product {
            id: "2".into(),
            name: "Red Velvet Oreo".into(),
            description: "Red velvet dough filled with cream cheese and topped with oreo crumbs.".into(),
            price: 28000,
            category: "Special".into(),
            image: "https://images.unsplash.com/photo-1624356853128-48f1850f6fa2?q=80&w=800&auto=format&fit=crop".into(),
            topping_ids: vec!["1".into()],
            max_order: Some(10),
        },
        Product {
            id: "3".into(),
            name: "Matcha White Choco".into(),
            description: "Premium matcha cookie with white chocolate chunks.".into(),
            price: 27000,
            category: "New".into(),
            image: "https://images.unsplash.com/photo-1597733336794-12d05021d510?q=80&w=800&auto=format&fit=crop".into(),
            topping_ids: vec![],
            max_order: Some(10),
        },
    ];

    let toppings = vec![
        Topping {
            id: "1".into(),
            name: "Extra Sauce".into(),
            price: 5000,
        },
        Topping {
            id: "2".into(),
            name: "Ice Cream".into(),
            price: 8000,
        },
        Topping {
            id: "3".into(),
            name: "Almonds".into(),
            price: 4000,
        },
    ];

    let store = StoreConfig {
        name: Some("BiteBabe Demo".into()),
        slogan: Some("Premium Soft Cookies (Demo Mode)".into()),
        whatsapp: Some("628123456789".into()),
        theme: None,
    };

    Catalog {
        products,
        toppings,
        store,
    }
}
