//! Catalog pagination.

use log::{debug, info, warn};

use super::models::{OzonProductPage, ProductFilter, ProductListRequest, ProductListResponse};
use super::OzonClient;
use crate::error::{Result, SyncError};
use crate::http::read_json;

/// Page size requested from `/v2/product/list`.
pub const PAGE_LIMIT: u32 = 1000;

impl OzonClient {
    /// Fetches one catalog page starting after `last_id` (empty for the first page).
    pub async fn fetch_product_page(&self, last_id: &str) -> Result<OzonProductPage> {
        let body = ProductListRequest {
            filter: ProductFilter { visibility: "ALL" },
            last_id,
            limit: PAGE_LIMIT,
        };

        let response = self.post("/v2/product/list").json(&body).send().await?;
        let parsed: ProductListResponse = read_json(response).await?;

        debug!(
            "Product page: {} items, total {}, last_id '{}'",
            parsed.result.items.len(),
            parsed.result.total,
            parsed.result.last_id
        );
        Ok(parsed.result)
    }

    /// Collects every offer id in the seller catalog.
    ///
    /// Stops once the collected count reaches the reported total. A page with
    /// no items also ends the walk, since the cursor cannot advance past it.
    pub async fn fetch_offer_ids(&self) -> Result<Vec<String>> {
        info!("Fetching Ozon catalog");
        let mut offer_ids = Vec::new();
        let mut last_id = String::new();

        for _ in 0..self.max_pages {
            let page = self.fetch_product_page(&last_id).await?;
            let received = page.items.len();
            offer_ids.extend(page.items.into_iter().map(|p| p.offer_id));

            if offer_ids.len() >= page.total {
                info!("Fetched {} Ozon offer ids", offer_ids.len());
                return Ok(offer_ids);
            }
            if received == 0 {
                warn!(
                    "Ozon returned an empty page at {} of {} products",
                    offer_ids.len(),
                    page.total
                );
                return Ok(offer_ids);
            }
            last_id = page.last_id;
        }

        Err(SyncError::PaginationLimit {
            pages: self.max_pages,
        })
    }
}
