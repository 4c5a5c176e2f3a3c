//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading benefit
//! product catalogs from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Product;

use super::types::{CatalogMetadata, ProductCatalog, ProductsConfig};

/// Loads and provides access to a benefits product catalog.
///
/// # Directory Structure
///
/// ```text
/// config/benefits/
/// └── products.yaml   # Catalog metadata and product definitions
/// ```
///
/// Each product entry has the same shape callers pass to the engine:
/// `id`, `name`, `type`, `costs` and `employer_contribution`. An entry with an
/// unknown `type` fails the whole load.
///
/// # Example
///
/// ```no_run
/// use benefits_pricing::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/benefits").unwrap();
/// let product = loader.get_product("voluntary_life").unwrap();
/// println!("Loaded product: {}", product.name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ProductCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` on success, or an error if:
    /// - `products.yaml` is missing (`ConfigNotFound`)
    /// - The file is not valid YAML, a product is malformed, a product type is
    ///   unknown, or two products share an id (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let products_path = path.as_ref().join("products.yaml");
        let path_str = products_path.display().to_string();

        let content = fs::read_to_string(&products_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses a catalog from YAML content. `source` names the content in errors.
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let config: ProductsConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::check_unique_ids(&config.products, source)?;

        info!(
            catalog = %config.catalog.name,
            plan_year = %config.catalog.plan_year,
            products = config.products.len(),
            "Loaded benefits catalog"
        );

        Ok(Self {
            catalog: ProductCatalog::new(config.catalog, config.products),
        })
    }

    fn check_unique_ids(products: &[Product], source: &str) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for product in products {
            if !seen.insert(product.id.as_str()) {
                return Err(EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: format!("duplicate product id '{}'", product.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        self.catalog.metadata()
    }

    /// Gets a product by its id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use benefits_pricing::config::CatalogLoader;
    ///
    /// let loader = CatalogLoader::load("./config/benefits")?;
    /// let product = loader.get_product("long_term_disability")?;
    /// println!("Product type: {}", product.product_type());
    /// # Ok::<(), benefits_pricing::error::EngineError>(())
    /// ```
    pub fn get_product(&self, id: &str) -> EngineResult<&Product> {
        self.catalog
            .find(id)
            .ok_or_else(|| EngineError::ProductNotFound { id: id.to_string() })
    }
}
