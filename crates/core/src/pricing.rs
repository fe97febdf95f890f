//! The one place a discount is decided.
//!
//! Both the listing flag set by [`normalize`](crate::normalize) and the
//! detail-view [`PriceQuote`] go through [`is_discounted`].

use serde::{Deserialize, Serialize};

use crate::constants::{DISCOUNT_DENOMINATOR, DISCOUNT_NUMERATOR, DISCOUNT_PAGE_THRESHOLD};

/// A known page count below the threshold earns a discount; unknown never does.
#[must_use]
pub fn is_discounted(page_count: Option<u32>) -> bool {
    page_count.is_some_and(|pages| pages < DISCOUNT_PAGE_THRESHOLD)
}

/// Applies the 20% discount. Exact for prices that are multiples of 5.
#[must_use]
pub fn discounted_price(price: u32) -> u32 {
    price.saturating_mul(DISCOUNT_NUMERATOR) / DISCOUNT_DENOMINATOR
}

/// Price shown on the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub original_price: u32,
    pub final_price: u32,
    pub has_discount: bool,
}

impl PriceQuote {
    #[must_use]
    pub fn new(price: u32, page_count: Option<u32>) -> Self {
        let has_discount = is_discounted(page_count);
        let final_price = if has_discount { discounted_price(price) } else { price };
        Self { original_price: price, final_price, has_discount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(is_discounted(Some(149)));
        assert!(!is_discounted(Some(150)));
        assert!(!is_discounted(None));
    }

    #[test]
    fn short_book_quote_is_twenty_percent_off() {
        let quote = PriceQuote::new(50, Some(100));
        assert_eq!(quote, PriceQuote { original_price: 50, final_price: 40, has_discount: true });
    }

    #[test]
    fn unknown_page_count_keeps_full_price() {
        let quote = PriceQuote::new(85, None);
        assert_eq!(quote.final_price, 85);
        assert!(!quote.has_discount);
    }

    #[test]
    fn discount_is_exact_on_price_steps() {
        for price in (20..=100).step_by(5) {
            assert_eq!(discounted_price(price) * 5, price * 4);
        }
    }
}
