//! Error types for the Benefits Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a product.

use thiserror::Error;

use crate::models::{CommuterBenefit, Role};

/// The main error type for the Benefits Pricing Engine.
///
/// # Example
///
/// ```
/// use benefits_pricing::error::EngineError;
///
/// let error = EngineError::UnknownProductType {
///     product_type: "vision".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown product type: vision");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The product type code is not one the engine knows how to price.
    #[error("Unknown product type: {product_type}")]
    UnknownProductType {
        /// The offending type code.
        product_type: String,
    },

    /// A product definition had a known type but an unusable cost table.
    #[error("Invalid product of type '{product_type}': {message}")]
    InvalidProduct {
        /// The product type code.
        product_type: String,
        /// A description of what was wrong with the definition.
        message: String,
    },

    /// A covered role has no entry in the selected coverage levels.
    #[error("No coverage level selected for role '{role}'")]
    CoverageNotFound {
        /// The role missing a coverage entry.
        role: Role,
    },

    /// A covered role has no entry in the product's cost table.
    #[error("No cost defined for role '{role}'")]
    RoleCostNotFound {
        /// The role missing a cost entry.
        role: Role,
    },

    /// The selected commuter benefit is not priced by the product.
    #[error("No cost defined for commuter benefit '{benefit}'")]
    BenefitNotFound {
        /// The benefit missing from the cost table.
        benefit: CommuterBenefit,
    },

    /// An age-banded rate table has no band covering the employee's age.
    #[error("No rate band covers age {age}")]
    AgeBandNotFound {
        /// The employee's age.
        age: u32,
    },

    /// A required selection was absent from the selected options.
    #[error("Missing selection: {field}")]
    MissingSelection {
        /// The name of the missing option.
        field: String,
    },

    /// An employee record was missing data required by the product.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Product id was not found in the catalog.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
