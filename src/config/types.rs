//! Catalog configuration types.
//!
//! This module contains the strongly-typed structures deserialized from a
//! catalog's `products.yaml`.

use serde::Deserialize;

use crate::models::{Product, ProductType};

/// Metadata about a benefits catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The human-readable name of the catalog.
    pub name: String,
    /// The plan year the prices apply to (e.g., "2026").
    pub plan_year: String,
    /// ISO currency code of every price in the catalog.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// `products.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsConfig {
    /// Catalog metadata.
    pub catalog: CatalogMetadata,
    /// The products offered.
    pub products: Vec<Product>,
}

/// The complete benefits catalog loaded from YAML.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    metadata: CatalogMetadata,
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Creates a new ProductCatalog from its component parts.
    pub fn new(metadata: CatalogMetadata, products: Vec<Product>) -> Self {
        Self { metadata, products }
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns all products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the product with the given id, if any.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Returns the products of one type in catalog order.
    pub fn products_of_type(&self, product_type: ProductType) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.product_type() == product_type)
    }
}
