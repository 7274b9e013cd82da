//! Fixed-size batching for marketplace payload limits

/// Ozon `/v1/product/import/stocks` accepts at most 100 entries
pub const OZON_STOCK_BATCH: usize = 100;
/// Ozon `/v1/product/import/prices` batch size
pub const OZON_PRICE_BATCH: usize = 900;
/// Market `offers/stocks` accepts at most 2000 SKUs
pub const MARKET_STOCK_BATCH: usize = 2000;
/// Market `offer-prices/updates` accepts at most 500 offers
pub const MARKET_PRICE_BATCH: usize = 500;

/// Split `items` into consecutive chunks of at most `size` elements
///
/// Order is preserved and only the last chunk may be short. A `size` of zero
/// is treated as one.
pub fn divide<T>(items: &[T], size: usize) -> std::slice::Chunks<'_, T> {
    items.chunks(size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_with_short_tail() {
        let chunks: Vec<&[i32]> = divide(&[1, 2, 3, 4, 5], 2).collect();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        let empty: [i32; 0] = [];
        assert_eq!(divide(&empty, 3).count(), 0);
        assert_eq!(divide(&empty, 1).count(), 0);
    }

    #[test]
    fn concatenation_restores_input() {
        let items: Vec<u32> = (0..2345).collect();
        let chunks: Vec<&[u32]> = divide(&items, MARKET_STOCK_BATCH).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 2000);
        assert_eq!(chunks.concat(), items);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail() {
        let items = [1, 2, 3, 4];
        assert_eq!(divide(&items, 2).count(), 2);
    }

    #[test]
    fn zero_size_falls_back_to_one() {
        assert_eq!(divide(&[1, 2, 3], 0).count(), 3);
    }
}
