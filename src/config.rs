use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL the four static data files are fetched from.
    pub data_base_url: String,
    /// Single named slot holding the serialized cart between runs.
    pub cart_storage_path: PathBuf,
    /// Directory the seed binary writes the data files into.
    pub data_dir: PathBuf,
    /// Where the rendered storefront page is written; stdout if unset.
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_base_url = env::var("DATA_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/data".to_string());
        let cart_storage_path = env::var("CART_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".storefront_cart.json"));
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let output_path = env::var("OUTPUT_PATH").ok().map(PathBuf::from);
        Ok(Self {
            data_base_url,
            cart_storage_path,
            data_dir,
            output_path,
        })
    }

    pub fn products_url(&self) -> String {
        format!("{}/products.json", self.data_base_url.trim_end_matches('/'))
    }

    pub fn toppings_url(&self) -> String {
        format!("{}/toppings.json", self.data_base_url.trim_end_matches('/'))
    }

    pub fn store_url(&self) -> String {
        format!("{}/store.json", self.data_base_url.trim_end_matches('/'))
    }

    pub fn landing_url(&self) -> String {
        format!(
            "{}/landing_page.json",
            self.data_base_url.trim_end_matches('/')
        )
    }
}
