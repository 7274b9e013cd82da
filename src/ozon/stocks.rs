//! Stock import.

use log::info;

use super::models::{OzonStock, StocksRequest};
use super::OzonClient;
use crate::error::Result;
use crate::http::read_json;

impl OzonClient {
    /// Sends one batch of stock levels and returns Ozon's per-item result.
    pub async fn update_stocks(&self, stocks: &[OzonStock]) -> Result<serde_json::Value> {
        info!("Sending {} stock entries to Ozon", stocks.len());
        let response = self
            .post("/v1/product/import/stocks")
            .json(&StocksRequest { stocks })
            .send()
            .await?;
        read_json(response).await
    }
}
