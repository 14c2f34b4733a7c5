use std::fs;

use storefront_engine::{
    config::AppConfig,
    services::{catalog_service, landing_service},
};

/// Write the built-in demo dataset out as the four static data files so a
/// plain file host serves a working store.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let catalog = catalog_service::demo_catalog();
    let landing = landing_service::default_content();

    fs::create_dir_all(&config.data_dir)?;
    write_json(&config, "products.json", &catalog.products)?;
    write_json(&config, "toppings.json", &catalog.toppings)?;
    write_json(&config, "store.json", &catalog.store)?;
    write_json(&config, "landing_page.json", &landing)?;

    println!("Seeded data files into {}", config.data_dir.display());
    Ok(())
}

fn write_json<T: serde::Serialize>(
    config: &AppConfig,
    file: &str,
    value: &T,
) -> anyhow::Result<()> {
    let path = config.data_dir.join(file);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    println!("Wrote {}", path.display());
    Ok(())
}
