//! Commuter benefit price calculation.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CommuterCost, SelectedOptions};

/// Looks up the flat price of the elected commuter benefit.
///
/// # Errors
///
/// - [`EngineError::MissingSelection`] if no benefit was elected
/// - [`EngineError::BenefitNotFound`] if the cost table does not price the benefit
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::calculate_commuter_price;
/// use benefits_pricing::models::{CommuterBenefit, CommuterCost, SelectedOptions};
///
/// let costs = vec![
///     CommuterCost { benefit: CommuterBenefit::Train, price: 84.75 },
///     CommuterCost { benefit: CommuterBenefit::Parking, price: 250.0 },
/// ];
/// let options = SelectedOptions {
///     benefit: Some(CommuterBenefit::Train),
///     ..Default::default()
/// };
///
/// assert_eq!(calculate_commuter_price(&costs, &options).unwrap(), 84.75);
/// ```
pub fn calculate_commuter_price(
    costs: &[CommuterCost],
    options: &SelectedOptions,
) -> EngineResult<f64> {
    let benefit = options
        .benefit
        .ok_or_else(|| EngineError::MissingSelection {
            field: "benefit".to_string(),
        })?;

    let price = costs
        .iter()
        .find(|cost| cost.benefit == benefit)
        .map(|cost| cost.price)
        .ok_or(EngineError::BenefitNotFound { benefit })?;
    debug!(benefit = %benefit, price, "Priced commuter benefit");

    Ok(price)
}
