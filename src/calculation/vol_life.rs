//! Voluntary life price calculation.
//!
//! Each covered role is priced from its own coverage level and its own row in
//! the cost table, and the role prices are summed. A role that is covered but
//! has no coverage level, or no cost row, is an error.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CoverageLevel, Role, RoleCost, SelectedOptions};

/// Calculates the pre-contribution price of one role's life coverage.
///
/// The price is `coverage / cost_divisor * price`, using the first coverage
/// level and the first cost row for the role.
///
/// # Errors
///
/// - [`EngineError::CoverageNotFound`] if no coverage level exists for the role
/// - [`EngineError::RoleCostNotFound`] if the cost table has no row for the role
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::calculate_vol_life_price_per_role;
/// use benefits_pricing::models::{CoverageLevel, Role, RoleCost};
///
/// let coverage_level = vec![CoverageLevel { role: Role::Employee, coverage: 125000.0 }];
/// let costs = vec![RoleCost { role: Role::Employee, price: 0.35, cost_divisor: 1000.0 }];
///
/// let price = calculate_vol_life_price_per_role(Role::Employee, &coverage_level, &costs).unwrap();
/// assert_eq!(price, 43.75);
/// ```
pub fn calculate_vol_life_price_per_role(
    role: Role,
    coverage_level: &[CoverageLevel],
    costs: &[RoleCost],
) -> EngineResult<f64> {
    let coverage = coverage_level
        .iter()
        .find(|level| level.role == role)
        .map(|level| level.coverage)
        .ok_or(EngineError::CoverageNotFound { role })?;

    let cost = costs
        .iter()
        .find(|cost| cost.role == role)
        .ok_or(EngineError::RoleCostNotFound { role })?;

    let price = coverage / cost.cost_divisor * cost.price;
    debug!(role = %role, coverage, price, "Priced vol life role");

    Ok(price)
}

/// Calculates the pre-contribution price of a voluntary life election.
///
/// Sums [`calculate_vol_life_price_per_role`] over the covered family members
/// in election order. No covered roles prices at zero.
pub fn calculate_vol_life_price(costs: &[RoleCost], options: &SelectedOptions) -> EngineResult<f64> {
    options
        .family_members_to_cover
        .iter()
        .try_fold(0.0, |total, &role| -> EngineResult<f64> {
            Ok(total + calculate_vol_life_price_per_role(role, &options.coverage_level, costs)?)
        })
}
