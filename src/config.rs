//! Environment configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Every config also has a `from_lookup` constructor so tests can feed
//! values without touching the real environment.

use crate::error::{Result, SyncError};

/// Default Ozon Seller API host
pub const OZON_API_URL: &str = "https://api-seller.ozon.ru";
/// Default Yandex Market partner API host
pub const MARKET_API_URL: &str = "https://api.partner.market.yandex.ru";
/// Default location of the supplier stock archive
pub const STOCK_URL: &str = "https://timeworld.ru/upload/files/ostatki.zip";

/// Load `.env` into the process environment if present
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(_) => log::debug!("No .env file found, using process environment"),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SyncError::MissingEnv(key))
}

fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Ozon seller credentials
#[derive(Debug, Clone)]
pub struct OzonConfig {
    pub seller_token: String,
    pub client_id: String,
    pub base_url: String,
}

impl OzonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            seller_token: required(&lookup, "SELLER_TOKEN")?,
            client_id: required(&lookup, "CLIENT_ID")?,
            base_url: optional(&lookup, "OZON_API_URL", OZON_API_URL),
        })
    }
}

/// One fulfillment model on Yandex Market: its campaign and warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketScope {
    pub label: &'static str,
    pub campaign_id: String,
    pub warehouse_id: String,
}

/// Yandex Market credentials and campaign layout
#[derive(Debug, Clone)]
pub struct MarketConfig {
    pub token: String,
    pub fbs_campaign_id: String,
    pub dbs_campaign_id: String,
    pub fbs_warehouse_id: String,
    pub dbs_warehouse_id: String,
    pub base_url: String,
}

impl MarketConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            token: required(&lookup, "MARKET_TOKEN")?,
            fbs_campaign_id: required(&lookup, "FBS_ID")?,
            dbs_campaign_id: required(&lookup, "DBS_ID")?,
            fbs_warehouse_id: required(&lookup, "WAREHOUSE_FBS_ID")?,
            dbs_warehouse_id: required(&lookup, "WAREHOUSE_DBS_ID")?,
            base_url: optional(&lookup, "MARKET_API_URL", MARKET_API_URL),
        })
    }

    /// Scopes in processing order: merchant-fulfilled first, then dropship
    pub fn scopes(&self) -> Vec<MarketScope> {
        vec![
            MarketScope {
                label: "FBS",
                campaign_id: self.fbs_campaign_id.clone(),
                warehouse_id: self.fbs_warehouse_id.clone(),
            },
            MarketScope {
                label: "DBS",
                campaign_id: self.dbs_campaign_id.clone(),
                warehouse_id: self.dbs_warehouse_id.clone(),
            },
        ]
    }
}

/// Stock archive URL, `STOCK_URL` or the supplier default
pub fn stock_url_from_env() -> String {
    optional(&env_lookup, "STOCK_URL", STOCK_URL)
}
