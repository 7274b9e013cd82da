//! Stock Sync - supplier stock to Ozon and Yandex Market
//!
//! Downloads the supplier's watch stock sheet and pushes stock levels and
//! prices to the Ozon and Yandex Market seller APIs. Offers the marketplace
//! knows but the sheet lacks are zeroed.

pub mod batch;
pub mod config;
pub mod error;
mod http;
pub mod inventory;
pub mod market;
pub mod ozon;
pub mod reconcile;
pub mod sync;

pub use error::{ErrorKind, Result, SyncError};
pub use inventory::{InventoryRecord, InventorySource};
pub use reconcile::{PriceLevel, StockLevel};
pub use sync::{
    sync_market, sync_ozon, upload_market_prices, upload_market_stocks, upload_ozon_prices,
    upload_ozon_stocks, PriceUpload, StockUpload, SyncReport,
};

/// Upper bound on catalog pages fetched before giving up on a marketplace
pub const MAX_CATALOG_PAGES: usize = 1000;
