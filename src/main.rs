use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_engine::{
    config::AppConfig,
    render,
    services::{cart_service::CartStore, catalog_service, landing_service},
    state::AppState,
    storage::FileStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let client = reqwest::Client::new();

    // The two loaders are independent; their fetches run concurrently and
    // each recovers to its own built-in defaults on failure.
    let (catalog, landing) = tokio::join!(
        catalog_service::load(&client, &config),
        landing_service::load(&client, &config),
    );
    tracing::info!(
        products = catalog.products.len(),
        toppings = catalog.toppings.len(),
        "catalog ready"
    );

    let cart = CartStore::restore(Box::new(FileStorage::new(&config.cart_storage_path)));
    tracing::info!(items = cart.len(), "cart restored");

    let state = AppState::new(catalog, landing, cart);
    let page = render::render_page(&state);

    match config.output_path.as_ref() {
        Some(path) => {
            std::fs::write(path, page)?;
            tracing::info!(path = %path.display(), "storefront page written");
        }
        None => println!("{page}"),
    }

    Ok(())
}
