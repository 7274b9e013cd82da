//! Stock updates.

use log::info;
use reqwest::Method;

use super::models::{MarketStock, StocksRequest};
use super::MarketClient;
use crate::error::Result;
use crate::http::read_json;

impl MarketClient {
    /// Replaces stock for one batch of SKUs in the campaign.
    pub async fn update_stocks(
        &self,
        campaign_id: &str,
        skus: &[MarketStock],
    ) -> Result<serde_json::Value> {
        info!(
            "Sending {} stock entries to Market campaign {}",
            skus.len(),
            campaign_id
        );
        let response = self
            .request(Method::PUT, campaign_id, "offers/stocks")
            .json(&StocksRequest { skus })
            .send()
            .await?;
        read_json(response).await
    }
}
