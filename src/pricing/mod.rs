//! Quantity-tiered print pricing.

pub(crate) mod bracket;
pub(crate) mod resolver;
pub(crate) mod table;
