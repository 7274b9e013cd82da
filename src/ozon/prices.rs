//! Price import.

use log::info;

use super::models::{OzonPrice, PricesRequest};
use super::OzonClient;
use crate::error::Result;
use crate::http::read_json;

impl OzonClient {
    /// Sends one batch of prices and returns Ozon's per-item result.
    pub async fn update_prices(&self, prices: &[OzonPrice]) -> Result<serde_json::Value> {
        info!("Sending {} prices to Ozon", prices.len());
        let response = self
            .post("/v1/product/import/prices")
            .json(&PricesRequest { prices })
            .send()
            .await?;
        read_json(response).await
    }
}
