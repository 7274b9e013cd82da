//! Price updates.

use log::info;
use reqwest::Method;

use super::models::{MarketPrice, PricesRequest};
use super::MarketClient;
use crate::error::Result;
use crate::http::read_json;

impl MarketClient {
    /// Sets prices for one batch of offers in the campaign.
    pub async fn update_prices(
        &self,
        campaign_id: &str,
        offers: &[MarketPrice],
    ) -> Result<serde_json::Value> {
        info!(
            "Sending {} prices to Market campaign {}",
            offers.len(),
            campaign_id
        );
        let response = self
            .request(Method::POST, campaign_id, "offer-prices/updates")
            .json(&PricesRequest { offers })
            .send()
            .await?;
        read_json(response).await
    }
}
