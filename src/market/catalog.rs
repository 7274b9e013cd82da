//! Offer mapping pagination.

use log::{debug, info};
use reqwest::Method;

use super::models::{MarketOfferPage, OfferMappingResponse};
use super::MarketClient;
use crate::error::{Result, SyncError};
use crate::http::read_json;

/// Page size requested from `offer-mapping-entries`.
pub const PAGE_LIMIT: u32 = 200;

impl MarketClient {
    /// Fetches one page of offer mappings; an empty token requests the first page.
    pub async fn fetch_offer_page(
        &self,
        campaign_id: &str,
        page_token: &str,
    ) -> Result<MarketOfferPage> {
        let limit = PAGE_LIMIT.to_string();
        let response = self
            .request(Method::GET, campaign_id, "offer-mapping-entries")
            .query(&[("page_token", page_token), ("limit", limit.as_str())])
            .send()
            .await?;
        let parsed: OfferMappingResponse = read_json(response).await?;

        debug!(
            "Offer page: {} entries, next token {:?}",
            parsed.result.offer_mapping_entries.len(),
            parsed.result.next_page_token()
        );
        Ok(parsed.result)
    }

    /// Collects every shop SKU of the campaign, following `nextPageToken`.
    pub async fn fetch_offer_ids(&self, campaign_id: &str) -> Result<Vec<String>> {
        info!("Fetching Market catalog for campaign {}", campaign_id);
        let mut offer_ids = Vec::new();
        let mut page_token = String::new();

        for _ in 0..self.max_pages {
            let page = self.fetch_offer_page(campaign_id, &page_token).await?;
            let next = page.next_page_token().map(str::to_string);
            offer_ids.extend(
                page.offer_mapping_entries
                    .into_iter()
                    .map(|entry| entry.offer.shop_sku),
            );

            match next {
                Some(token) => page_token = token,
                None => {
                    info!(
                        "Fetched {} Market offer ids for campaign {}",
                        offer_ids.len(),
                        campaign_id
                    );
                    return Ok(offer_ids);
                }
            }
        }

        Err(SyncError::PaginationLimit {
            pages: self.max_pages,
        })
    }
}
