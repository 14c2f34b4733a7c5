use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

pub mod cart_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod landing_service;

pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    what: &'static str,
) -> AppResult<T> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::FetchStatus(what, response.status()));
    }
    Ok(response.json().await?)
}
