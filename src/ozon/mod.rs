//! Ozon Seller API client.
//!
//! Covers the three calls the sync needs: listing the catalog, importing
//! stocks and importing prices. Every request carries the `Client-Id` and
//! `Api-Key` headers.

mod catalog;
mod models;
mod prices;
mod stocks;

use reqwest::Client;

use crate::config::OzonConfig;

pub use models::{OzonPrice, OzonProduct, OzonProductPage, OzonStock};

/// Ozon Seller API client for one seller account.
pub struct OzonClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) client_id: String,
    pub(crate) api_key: String,
    pub(crate) max_pages: usize,
}

impl OzonClient {
    /// Creates a client against the production API.
    pub fn new(client_id: String, api_key: String) -> Self {
        Self::with_base_url(crate::config::OZON_API_URL, client_id, api_key)
    }

    /// Creates a client against an arbitrary API host.
    pub fn with_base_url(base_url: &str, client_id: String, api_key: String) -> Self {
        log::info!("Creating Ozon API client for client {}", client_id);
        log::debug!("API key length: {}", api_key.len());
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id,
            api_key,
            max_pages: crate::MAX_CATALOG_PAGES,
        }
    }

    pub fn from_config(config: &OzonConfig) -> Self {
        Self::with_base_url(
            &config.base_url,
            config.client_id.clone(),
            config.seller_token.clone(),
        )
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);
        self.client
            .post(url)
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
