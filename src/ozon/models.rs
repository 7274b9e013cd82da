//! Ozon request and response bodies.

use serde::{Deserialize, Serialize};

use crate::reconcile::{PriceLevel, StockLevel};

#[derive(Debug, Serialize)]
pub(crate) struct ProductListRequest<'a> {
    pub filter: ProductFilter,
    pub last_id: &'a str,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductFilter {
    pub visibility: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductListResponse {
    pub result: OzonProductPage,
}

/// One page of `/v2/product/list`.
#[derive(Debug, Deserialize)]
pub struct OzonProductPage {
    #[serde(default)]
    pub items: Vec<OzonProduct>,
    pub total: usize,
    #[serde(default)]
    pub last_id: String,
}

#[derive(Debug, Deserialize)]
pub struct OzonProduct {
    pub offer_id: String,
}

/// Stock entry for `/v1/product/import/stocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OzonStock {
    pub offer_id: String,
    pub stock: u32,
}

impl From<&StockLevel> for OzonStock {
    fn from(level: &StockLevel) -> Self {
        Self {
            offer_id: level.offer_id.clone(),
            stock: level.quantity,
        }
    }
}

/// Price entry for `/v1/product/import/prices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OzonPrice {
    pub auto_action_enabled: &'static str,
    pub currency_code: &'static str,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}

impl From<&PriceLevel> for OzonPrice {
    fn from(level: &PriceLevel) -> Self {
        Self {
            auto_action_enabled: "UNKNOWN",
            currency_code: "RUB",
            offer_id: level.offer_id.clone(),
            old_price: "0".to_string(),
            price: level.price.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest<'a> {
    pub stocks: &'a [OzonStock],
}

#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest<'a> {
    pub prices: &'a [OzonPrice],
}
