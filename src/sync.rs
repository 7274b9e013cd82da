//! Per-marketplace sync runs
//!
//! Each scope goes through the same sequence: fetch the catalog, reconcile
//! and push stock in batches, then reconcile and push prices. Scopes run one
//! after another. The first failure aborts the run; batches already accepted
//! by the marketplace stay applied.

use crate::batch::{
    divide, MARKET_PRICE_BATCH, MARKET_STOCK_BATCH, OZON_PRICE_BATCH, OZON_STOCK_BATCH,
};
use crate::config::MarketScope;
use crate::error::Result;
use crate::inventory::InventoryRecord;
use crate::market::{stock_timestamp, MarketClient, MarketPrice, MarketStock};
use crate::ozon::{OzonClient, OzonPrice, OzonStock};
use crate::reconcile::{in_stock, reconcile_prices, reconcile_stocks, PriceLevel, StockLevel};

/// Outcome of syncing one marketplace scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Scope label, e.g. `"Ozon"` or `"Market FBS"`
    pub scope: String,
    /// Offers known to the marketplace
    pub offers: usize,
    /// Stock entries produced (one per offer)
    pub stocks_sent: usize,
    /// Stock entries with a non-zero quantity
    pub in_stock: usize,
    /// Price entries produced
    pub prices_sent: usize,
    /// Write requests actually sent; zero on a dry run
    pub requests: usize,
}

/// Stock levels pushed to one scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockUpload {
    /// Every level produced, one per known offer
    pub levels: Vec<StockLevel>,
    /// Write requests sent
    pub requests: usize,
}

impl StockUpload {
    /// Levels with a non-zero quantity
    pub fn in_stock(&self) -> Vec<&StockLevel> {
        in_stock(&self.levels)
    }
}

/// Prices pushed to one scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceUpload {
    pub prices: Vec<PriceLevel>,
    /// Write requests sent
    pub requests: usize,
}

/// Reconcile stock against `offer_ids` and push it to Ozon in batches
pub async fn upload_ozon_stocks(
    client: &OzonClient,
    records: &[InventoryRecord],
    offer_ids: &[String],
    dry_run: bool,
) -> Result<StockUpload> {
    let levels = reconcile_stocks(records, offer_ids)?;
    let stocks: Vec<OzonStock> = levels.iter().map(OzonStock::from).collect();
    let mut requests = 0;
    if !dry_run {
        for batch in divide(&stocks, OZON_STOCK_BATCH) {
            client.update_stocks(batch).await?;
            requests += 1;
        }
    }
    let upload = StockUpload { levels, requests };
    log::info!(
        "Ozon stock: {} entries, {} in stock",
        upload.levels.len(),
        upload.in_stock().len()
    );
    Ok(upload)
}

/// Reconcile prices against `offer_ids` and push them to Ozon in batches
pub async fn upload_ozon_prices(
    client: &OzonClient,
    records: &[InventoryRecord],
    offer_ids: &[String],
    dry_run: bool,
) -> Result<PriceUpload> {
    let prices = reconcile_prices(records, offer_ids)?;
    let payload: Vec<OzonPrice> = prices.iter().map(OzonPrice::from).collect();
    let mut requests = 0;
    if !dry_run {
        for batch in divide(&payload, OZON_PRICE_BATCH) {
            client.update_prices(batch).await?;
            requests += 1;
        }
    }
    log::info!("Ozon prices: {} entries", prices.len());
    Ok(PriceUpload { prices, requests })
}

/// Sync the Ozon seller account: stock first, then prices
pub async fn sync_ozon(
    client: &OzonClient,
    records: &[InventoryRecord],
    dry_run: bool,
) -> Result<SyncReport> {
    let offer_ids = client.fetch_offer_ids().await?;
    let stocks = upload_ozon_stocks(client, records, &offer_ids, dry_run).await?;
    let prices = upload_ozon_prices(client, records, &offer_ids, dry_run).await?;

    Ok(SyncReport {
        scope: "Ozon".to_string(),
        offers: offer_ids.len(),
        stocks_sent: stocks.levels.len(),
        in_stock: stocks.in_stock().len(),
        prices_sent: prices.prices.len(),
        requests: stocks.requests + prices.requests,
    })
}

/// Reconcile stock against `offer_ids` and push it into the scope's warehouse
pub async fn upload_market_stocks(
    client: &MarketClient,
    scope: &MarketScope,
    records: &[InventoryRecord],
    offer_ids: &[String],
    dry_run: bool,
) -> Result<StockUpload> {
    let levels = reconcile_stocks(records, offer_ids)?;
    let updated_at = stock_timestamp(chrono::Utc::now());
    let skus: Vec<MarketStock> = levels
        .iter()
        .map(|level| MarketStock::new(level, &scope.warehouse_id, &updated_at))
        .collect();
    let mut requests = 0;
    if !dry_run {
        for batch in divide(&skus, MARKET_STOCK_BATCH) {
            client.update_stocks(&scope.campaign_id, batch).await?;
            requests += 1;
        }
    }
    let upload = StockUpload { levels, requests };
    log::info!(
        "Market {} stock: {} entries, {} in stock",
        scope.label,
        upload.levels.len(),
        upload.in_stock().len()
    );
    Ok(upload)
}

/// Reconcile prices against `offer_ids` and push them to the scope's campaign
pub async fn upload_market_prices(
    client: &MarketClient,
    scope: &MarketScope,
    records: &[InventoryRecord],
    offer_ids: &[String],
    dry_run: bool,
) -> Result<PriceUpload> {
    let prices = reconcile_prices(records, offer_ids)?;
    let payload: Vec<MarketPrice> = prices.iter().map(MarketPrice::from).collect();
    let mut requests = 0;
    if !dry_run {
        for batch in divide(&payload, MARKET_PRICE_BATCH) {
            client.update_prices(&scope.campaign_id, batch).await?;
            requests += 1;
        }
    }
    log::info!("Market {} prices: {} entries", scope.label, prices.len());
    Ok(PriceUpload { prices, requests })
}

/// Sync one Market campaign into its warehouse
pub async fn sync_market_scope(
    client: &MarketClient,
    scope: &MarketScope,
    records: &[InventoryRecord],
    dry_run: bool,
) -> Result<SyncReport> {
    let offer_ids = client.fetch_offer_ids(&scope.campaign_id).await?;
    let stocks = upload_market_stocks(client, scope, records, &offer_ids, dry_run).await?;
    let prices = upload_market_prices(client, scope, records, &offer_ids, dry_run).await?;

    Ok(SyncReport {
        scope: format!("Market {}", scope.label),
        offers: offer_ids.len(),
        stocks_sent: stocks.levels.len(),
        in_stock: stocks.in_stock().len(),
        prices_sent: prices.prices.len(),
        requests: stocks.requests + prices.requests,
    })
}

/// Sync every Market scope in order, stopping at the first failure
pub async fn sync_market(
    client: &MarketClient,
    scopes: &[MarketScope],
    records: &[InventoryRecord],
    dry_run: bool,
) -> Result<Vec<SyncReport>> {
    let mut reports = Vec::with_capacity(scopes.len());
    for scope in scopes {
        log::info!("Syncing Market {} (campaign {})", scope.label, scope.campaign_id);
        reports.push(sync_market_scope(client, scope, records, dry_run).await?);
    }
    Ok(reports)
}
