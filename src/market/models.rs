//! Yandex Market request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reconcile::{PriceLevel, StockLevel};

/// Currency code Market expects for rubles.
pub const CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize)]
pub(crate) struct OfferMappingResponse {
    pub result: MarketOfferPage,
}

/// One page of `offer-mapping-entries`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOfferPage {
    #[serde(default)]
    pub offer_mapping_entries: Vec<MarketOfferEntry>,
    #[serde(default)]
    pub paging: Paging,
}

impl MarketOfferPage {
    /// Continuation token, `None` on the last page
    pub fn next_page_token(&self) -> Option<&str> {
        self.paging
            .next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MarketOfferEntry {
    pub offer: MarketOffer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOffer {
    pub shop_sku: String,
}

/// SKU entry for `offers/stocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStock {
    pub sku: String,
    pub warehouse_id: String,
    pub items: Vec<MarketStockItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStockItem {
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub updated_at: String,
}

impl MarketStock {
    /// Wrap a stock level as a single `FIT` item stamped with `updated_at`
    pub fn new(level: &StockLevel, warehouse_id: &str, updated_at: &str) -> Self {
        Self {
            sku: level.offer_id.clone(),
            warehouse_id: warehouse_id.to_string(),
            items: vec![MarketStockItem {
                count: level.quantity,
                kind: "FIT",
                updated_at: updated_at.to_string(),
            }],
        }
    }
}

/// Timestamp Market accepts in `updatedAt`: UTC, whole seconds, `Z` suffix.
pub fn stock_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Offer entry for `offer-prices/updates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPrice {
    pub id: String,
    pub price: MarketPriceValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceValue {
    pub value: u64,
    pub currency_id: &'static str,
}

impl From<&PriceLevel> for MarketPrice {
    fn from(level: &PriceLevel) -> Self {
        Self {
            id: level.offer_id.clone(),
            price: MarketPriceValue {
                value: level.price,
                currency_id: CURRENCY,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest<'a> {
    pub skus: &'a [MarketStock],
}

#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest<'a> {
    pub offers: &'a [MarketPrice],
}
