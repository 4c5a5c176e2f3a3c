//! Calculation logic for the Benefits Pricing Engine.
//!
//! This module contains the per-product price calculators (voluntary life,
//! long-term disability and commuter), the employer contribution reducer,
//! price formatting, and the engine that ties them together.

mod commuter;
mod contribution;
mod engine;
mod ltd;
mod rounding;
mod vol_life;

pub use commuter::calculate_commuter_price;
pub use contribution::{get_employer_contribution, is_contribution_capped};
pub use engine::{
    calculate_pre_contribution_price, calculate_product_price, price_product, price_request,
};
pub use ltd::{
    LtdRateLookup, calculate_ltd_price, lookup_ltd_rate, ltd_covered_salary, ltd_price_for_rate,
};
pub use rounding::format_price;
pub use vol_life::{calculate_vol_life_price, calculate_vol_life_price_per_role};
