//! Tests for Market wire types.

use chrono::{TimeZone, Utc};

use crate::market::{stock_timestamp, MarketOfferPage, MarketPrice, MarketStock};
use crate::reconcile::{PriceLevel, StockLevel};

#[test]
fn timestamp_is_whole_seconds_utc() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()
        + chrono::Duration::milliseconds(456);
    assert_eq!(stock_timestamp(now), "2024-03-05T07:08:09Z");
}

#[test]
fn stock_serializes_with_fit_item() {
    let level = StockLevel {
        offer_id: "GA-100".to_string(),
        quantity: 100,
    };
    let stock = MarketStock::new(&level, "555", "2024-03-05T07:08:09Z");

    assert_eq!(
        serde_json::to_value(&stock).unwrap(),
        serde_json::json!({
            "sku": "GA-100",
            "warehouseId": "555",
            "items": [{ "count": 100, "type": "FIT", "updatedAt": "2024-03-05T07:08:09Z" }]
        })
    );
}

#[test]
fn price_serializes_with_rur() {
    let price = MarketPrice::from(&PriceLevel {
        offer_id: "GA-100".to_string(),
        price: 5990,
    });
    assert_eq!(
        serde_json::to_value(&price).unwrap(),
        serde_json::json!({ "id": "GA-100", "price": { "value": 5990, "currencyId": "RUR" } })
    );
}

#[test]
fn empty_next_token_means_last_page() {
    let page: MarketOfferPage = serde_json::from_str(
        r#"{ "offerMappingEntries": [], "paging": { "nextPageToken": "" } }"#,
    )
    .unwrap();
    assert_eq!(page.next_page_token(), None);

    let page: MarketOfferPage = serde_json::from_str(r#"{ "offerMappingEntries": [] }"#).unwrap();
    assert_eq!(page.next_page_token(), None);

    let page: MarketOfferPage = serde_json::from_str(
        r#"{ "offerMappingEntries": [], "paging": { "nextPageToken": "abc" } }"#,
    )
    .unwrap();
    assert_eq!(page.next_page_token(), Some("abc"));
}
