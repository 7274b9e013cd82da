//! Stock and price reconciliation against a marketplace catalog
//!
//! The supplier sheet is the source of truth. Every offer the marketplace
//! knows about gets exactly one stock level: matched offers take the sheet
//! quantity, the rest are zeroed. Prices are only sent for matched offers.

use crate::error::{Result, SyncError};
use crate::inventory::InventoryRecord;
use std::collections::HashSet;

/// Quantity pushed for the `">10"` marker
pub const OVERFLOW_STOCK: u32 = 100;

/// Marketplace-neutral stock level for one offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub offer_id: String,
    pub quantity: u32,
}

/// Marketplace-neutral price for one offer, whole currency units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    pub offer_id: String,
    pub price: u64,
}

/// Apply the supplier quantity policy
///
/// `">10"` becomes 100 and a single unit counts as out of stock.
pub fn parse_quantity(raw: &str) -> Result<u32> {
    match raw.trim() {
        ">10" => Ok(OVERFLOW_STOCK),
        "1" => Ok(0),
        other => other
            .parse::<u32>()
            .map_err(|_| SyncError::InvalidQuantity(raw.to_string())),
    }
}

/// Strip a printed price down to its whole-unit digits
///
/// The fraction after the first `.` is dropped (truncated, not rounded) and
/// every non-digit is removed from what remains.
///
/// # Examples
/// - `"5'990.00 руб."` -> `"5990"`
/// - `"1000 руб."` -> `"1000"`
/// - `"12.99"` -> `"12"`
pub fn price_conversion(raw: &str) -> String {
    let whole = raw.split('.').next().unwrap_or_default();
    whole.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `price_conversion` followed by an integer parse
pub fn parse_price(raw: &str) -> Result<u64> {
    price_conversion(raw)
        .parse::<u64>()
        .map_err(|_| SyncError::InvalidPrice(raw.to_string()))
}

/// Build one stock level per known offer
///
/// Matched records come first in sheet order, then the unmatched offers with
/// quantity 0 in catalog order. Duplicate offer ids are collapsed and a code
/// repeated in the sheet only counts on its first occurrence.
pub fn reconcile_stocks(
    records: &[InventoryRecord],
    offer_ids: &[String],
) -> Result<Vec<StockLevel>> {
    let mut pending: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut levels = Vec::with_capacity(pending.len());

    for record in records {
        if !pending.remove(record.code.as_str()) {
            continue;
        }
        levels.push(StockLevel {
            offer_id: record.code.clone(),
            quantity: parse_quantity(&record.quantity)?,
        });
    }

    let matched = levels.len();
    for offer_id in offer_ids {
        if pending.remove(offer_id.as_str()) {
            levels.push(StockLevel {
                offer_id: offer_id.clone(),
                quantity: 0,
            });
        }
    }

    log::debug!(
        "Reconciled {} stock levels ({} matched, {} zeroed)",
        levels.len(),
        matched,
        levels.len() - matched
    );
    Ok(levels)
}

/// Build prices for sheet records the marketplace knows about
pub fn reconcile_prices(
    records: &[InventoryRecord],
    offer_ids: &[String],
) -> Result<Vec<PriceLevel>> {
    let known: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();

    let prices = records
        .iter()
        .filter(|record| known.contains(record.code.as_str()))
        .map(|record| {
            Ok(PriceLevel {
                offer_id: record.code.clone(),
                price: parse_price(&record.price)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Reconciled {} prices", prices.len());
    Ok(prices)
}

/// Levels that will show as available on the marketplace
pub fn in_stock(levels: &[StockLevel]) -> Vec<&StockLevel> {
    levels.iter().filter(|level| level.quantity != 0).collect()
}
