//! Catalog loading for the Benefits Pricing Engine.
//!
//! This module loads benefit product catalogs from YAML files so that
//! callers can look products up by id instead of building them by hand.
//!
//! # Example
//!
//! ```no_run
//! use benefits_pricing::config::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./config/benefits").unwrap();
//! println!("Loaded catalog: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{CatalogMetadata, ProductCatalog, ProductsConfig};
