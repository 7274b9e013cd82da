//! Yandex Market partner API client.
//!
//! A campaign is one fulfillment model (FBS or DBS) of the shop; every call
//! is scoped to a campaign id and authorised with a bearer token.

mod catalog;
mod models;
mod prices;
mod stocks;

use reqwest::{Client, Method};

use crate::config::MarketConfig;

pub use models::{
    stock_timestamp, MarketOffer, MarketOfferEntry, MarketOfferPage, MarketPrice,
    MarketPriceValue, MarketStock, MarketStockItem, Paging,
};

/// Yandex Market API client for one shop.
pub struct MarketClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
    pub(crate) max_pages: usize,
}

impl MarketClient {
    /// Creates a client against the production API.
    pub fn new(token: String) -> Self {
        Self::with_base_url(crate::config::MARKET_API_URL, token)
    }

    /// Creates a client against an arbitrary API host.
    pub fn with_base_url(base_url: &str, token: String) -> Self {
        log::info!("Creating Yandex Market API client");
        log::debug!("API token length: {}", token.len());
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            max_pages: crate::MAX_CATALOG_PAGES,
        }
    }

    pub fn from_config(config: &MarketConfig) -> Self {
        Self::with_base_url(&config.base_url, config.token.clone())
    }

    fn request(&self, method: Method, campaign_id: &str, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/campaigns/{}/{}", self.base_url, campaign_id, path);
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
