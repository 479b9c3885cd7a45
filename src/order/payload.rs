use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::foundation::error::{PrintframeError, PrintframeResult};
use crate::pricing::resolver::{PriceBreakdown, quote, resolve};
use crate::pricing::table::RateTable;
use crate::render::compositor::ComposedImage;

/// Free-form customer fields, passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Order notes.
    pub notes: String,
}

/// JSON body handed to the external order-intake service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Client-generated order id.
    pub id: Uuid,
    /// Customer fields, flattened into the top-level object.
    #[serde(flatten)]
    pub customer: CustomerDetails,
    /// Rate table category.
    pub category: String,
    /// Print size label.
    pub size: String,
    /// Unit price, quantity and total.
    pub price: PriceBreakdown,
    /// Composited print as a `data:image/png;base64,...` URI.
    pub image: String,
    /// RFC 3339 UTC creation time.
    pub created_at: String,
}

impl OrderPayload {
    /// Assemble a payload with a fresh id and the current time.
    pub fn new(
        customer: CustomerDetails,
        category: impl Into<String>,
        size: impl Into<String>,
        price: PriceBreakdown,
        image: &ComposedImage,
    ) -> PrintframeResult<Self> {
        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| PrintframeError::serde(format!("format order timestamp: {e}")))?;
        Ok(Self {
            id: Uuid::new_v4(),
            customer,
            category: category.into(),
            size: size.into(),
            price,
            image: image.to_data_uri(),
            created_at,
        })
    }

    /// Price the order from `table` and assemble the payload.
    ///
    /// A category/size/quantity with no matching bracket is priced at `0`.
    pub fn priced(
        table: &RateTable,
        customer: CustomerDetails,
        category: &str,
        size: &str,
        quantity: i64,
        image: &ComposedImage,
    ) -> PrintframeResult<Self> {
        if resolve(table, category, size, quantity).is_none() {
            tracing::warn!(category, size, quantity, "no rate bracket matched, pricing at 0");
        }
        let price = quote(table, category, size, quantity);
        Self::new(customer, category, size, price, image)
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> PrintframeResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PrintframeError::serde(format!("serialize order payload: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/order/payload.rs"]
mod tests;
