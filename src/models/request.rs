//! Request types for callers that hand the engine raw JSON.
//!
//! Wrappers (HTTP handlers, batch jobs) typically receive a product
//! definition they have not validated. [`PricingRequest`] keeps the product
//! as raw JSON so that an unknown product type surfaces as
//! [`EngineError::UnknownProductType`](crate::error::EngineError) rather than
//! as a generic deserialization failure.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{Employee, Product, SelectedOptions};

/// Everything needed to price one product for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    /// The product definition, resolved by [`PricingRequest::product`].
    pub product: serde_json::Value,
    /// The employee enrolling.
    pub employee: Employee,
    /// The employee's elections for the product.
    #[serde(default)]
    pub selected_options: SelectedOptions,
}

impl PricingRequest {
    /// Resolves the product definition carried by the request.
    pub fn product(&self) -> EngineResult<Product> {
        Product::from_value(self.product.clone())
    }
}
