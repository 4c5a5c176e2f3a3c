//! Employer contribution calculation.

use tracing::warn;

use crate::models::ContributionMode;

/// Returns the amount the employer pays towards a pre-contribution price.
///
/// A flat dollar contribution never exceeds the price it subsidises, so the
/// employee price never goes negative. A percentage contribution is
/// `price * (amount / 100)`.
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::get_employer_contribution;
/// use benefits_pricing::models::ContributionMode;
///
/// assert_eq!(get_employer_contribution(&ContributionMode::Dollars(10.0), 43.75), 10.0);
/// assert_eq!(get_employer_contribution(&ContributionMode::Percentage(10.0), 43.75), 4.375);
/// ```
pub fn get_employer_contribution(mode: &ContributionMode, price: f64) -> f64 {
    match *mode {
        ContributionMode::Dollars(amount) => {
            if amount > price {
                warn!(amount, price, "Dollar contribution exceeds price; capping at price");
                price
            } else {
                amount
            }
        }
        ContributionMode::Percentage(amount) => price * (amount / 100.0),
    }
}

/// Returns true if a dollar contribution will be capped at the price.
pub fn is_contribution_capped(mode: &ContributionMode, price: f64) -> bool {
    matches!(*mode, ContributionMode::Dollars(amount) if amount > price)
}
