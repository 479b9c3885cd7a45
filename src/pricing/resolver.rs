use serde::{Deserialize, Serialize};

use crate::pricing::table::RateTable;

/// Resolve the unit price for `quantity` prints of `size` in `category`.
///
/// Brackets are scanned in table order and the first one whose range contains `quantity`
/// wins; overlapping brackets are the table author's responsibility. Malformed descriptors
/// never match. Returns `None` when the category or size is unknown, or when no bracket
/// matches (including gaps between brackets).
#[tracing::instrument(level = "trace", skip(table), ret)]
pub fn resolve(table: &RateTable, category: &str, size: &str, quantity: i64) -> Option<u64> {
    table
        .brackets(category, size)?
        .iter()
        .find(|b| b.matches(quantity))
        .map(|b| b.unit_price())
}

/// [`resolve`], with a miss priced at `0`.
pub fn price_or_zero(table: &RateTable, category: &str, size: &str, quantity: i64) -> u64 {
    resolve(table, category, size, quantity).unwrap_or(0)
}

/// Unit price, quantity and total as sent with an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Resolved unit price, `0` when no bracket matched.
    pub unit_price: u64,
    /// Requested quantity.
    pub quantity: i64,
    /// `unit_price * quantity`; non-positive quantities total `0`.
    pub total: u64,
}

impl PriceBreakdown {
    /// Breakdown for a known unit price.
    pub fn new(unit_price: u64, quantity: i64) -> Self {
        let billable = u64::try_from(quantity).unwrap_or(0);
        Self {
            unit_price,
            quantity,
            total: unit_price.saturating_mul(billable),
        }
    }
}

/// Price `quantity` prints, applying the miss-is-zero policy.
pub fn quote(table: &RateTable, category: &str, size: &str, quantity: i64) -> PriceBreakdown {
    PriceBreakdown::new(price_or_zero(table, category, size, quantity), quantity)
}

#[cfg(test)]
#[path = "../../tests/unit/pricing/resolver.rs"]
mod tests;
