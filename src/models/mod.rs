//! Core data models for the Benefits Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pricing_result;
mod product;
mod request;
mod selected_options;

pub use employee::Employee;
pub use pricing_result::{AuditStep, AuditTrace, AuditWarning, PricingResult};
pub use product::{
    AgeBand, CommuterBenefit, CommuterCost, ContributionMode, LtdCosts, LtdRate, Product,
    ProductPlan, ProductType, RawProduct, Role, RoleCost,
};
pub use request::PricingRequest;
pub use selected_options::{CoverageLevel, SelectedOptions};
