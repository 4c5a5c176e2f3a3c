//! Long-term disability price calculation.
//!
//! LTD is an employee-only benefit: the price is zero unless the employee
//! (`ee`) is among the covered roles. Coverage is a percentage of salary, and
//! the rate is either flat or selected by the employee's age.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LtdCosts, LtdRate, Role, SelectedOptions};

/// The rate that applies to one employee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LtdRateLookup {
    /// The price per coverage unit.
    pub price: f64,
    /// The number of coverage dollars in one unit.
    pub cost_divisor: f64,
}

/// Resolves the LTD rate for an employee.
///
/// # Errors
///
/// - [`EngineError::InvalidEmployee`] if the rate is age-banded and the employee has no age
/// - [`EngineError::AgeBandNotFound`] if no band covers the employee's age
pub fn lookup_ltd_rate(rate: &LtdRate, employee: &Employee) -> EngineResult<LtdRateLookup> {
    match rate {
        LtdRate::Flat {
            price,
            cost_divisor,
        } => Ok(LtdRateLookup {
            price: *price,
            cost_divisor: *cost_divisor,
        }),
        LtdRate::AgeBanded {
            cost_divisor,
            bands,
        } => {
            let age = employee.age.ok_or_else(|| EngineError::InvalidEmployee {
                field: "age".to_string(),
                message: "required for age-banded rates".to_string(),
            })?;

            let band = bands
                .iter()
                .find(|band| band.contains(age))
                .ok_or(EngineError::AgeBandNotFound { age })?;

            Ok(LtdRateLookup {
                price: band.price,
                cost_divisor: *cost_divisor,
            })
        }
    }
}

/// Returns the salary amount covered by the benefit.
pub fn ltd_covered_salary(costs: &LtdCosts, employee: &Employee) -> f64 {
    employee.salary * (costs.coverage_percentage / 100.0)
}

/// Prices the covered salary at an already resolved rate.
pub fn ltd_price_for_rate(costs: &LtdCosts, employee: &Employee, rate: LtdRateLookup) -> f64 {
    ltd_covered_salary(costs, employee) / rate.cost_divisor * rate.price
}

/// Calculates the pre-contribution price of long-term disability coverage.
///
/// Returns `0.0` when the employee role is not elected. Otherwise the price is
/// `salary * (coverage_percentage / 100) / cost_divisor * price`.
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::calculate_ltd_price;
/// use benefits_pricing::models::{Employee, LtdCosts, LtdRate, Role, SelectedOptions};
///
/// let costs = LtdCosts {
///     coverage_percentage: 60.0,
///     rate: LtdRate::Flat { price: 0.6, cost_divisor: 1000.0 },
/// };
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Jane Doe".to_string(),
///     salary: 89000.0,
///     age: None,
/// };
/// let options = SelectedOptions {
///     family_members_to_cover: vec![Role::Employee],
///     ..Default::default()
/// };
///
/// assert_eq!(calculate_ltd_price(&costs, &employee, &options).unwrap(), 32.04);
/// ```
pub fn calculate_ltd_price(
    costs: &LtdCosts,
    employee: &Employee,
    options: &SelectedOptions,
) -> EngineResult<f64> {
    if !options.covers(Role::Employee) {
        debug!(employee_id = %employee.id, "LTD not elected for employee; price is zero");
        return Ok(0.0);
    }

    let rate = lookup_ltd_rate(&costs.rate, employee)?;
    let price = ltd_price_for_rate(costs, employee, rate);
    debug!(employee_id = %employee.id, price, "Priced LTD");

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeBand;

    fn create_employee(salary: f64, age: Option<u32>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Jane Doe".to_string(),
            salary,
            age,
        }
    }

    fn flat_costs() -> LtdCosts {
        LtdCosts {
            coverage_percentage: 60.0,
            rate: LtdRate::Flat {
                price: 0.6,
                cost_divisor: 1000.0,
            },
        }
    }

    fn banded_costs() -> LtdCosts {
        LtdCosts {
            coverage_percentage: 60.0,
            rate: LtdRate::AgeBanded {
                cost_divisor: 1000.0,
                bands: vec![
                    AgeBand {
                        min_age: 18,
                        max_age: 39,
                        price: 0.45,
                    },
                    AgeBand {
                        min_age: 40,
                        max_age: 64,
                        price: 0.9,
                    },
                ],
            },
        }
    }

    fn employee_options() -> SelectedOptions {
        SelectedOptions {
            family_members_to_cover: vec![Role::Employee],
            ..Default::default()
        }
    }

    #[test]
    fn test_employee_elected() {
        let price =
            calculate_ltd_price(&flat_costs(), &create_employee(89000.0, None), &employee_options())
                .unwrap();
        assert_eq!(price, 32.04);
    }

    #[test]
    fn test_employee_not_elected_is_zero() {
        let options = SelectedOptions {
            family_members_to_cover: vec![Role::Spouse, Role::Child],
            ..Default::default()
        };
        let price =
            calculate_ltd_price(&flat_costs(), &create_employee(89000.0, None), &options).unwrap();
        assert_eq!(price, 0.0);
    }

    #[test]
    fn test_no_roles_is_zero() {
        let price = calculate_ltd_price(
            &flat_costs(),
            &create_employee(89000.0, None),
            &SelectedOptions::default(),
        )
        .unwrap();
        assert_eq!(price, 0.0);
    }

    #[test]
    fn test_employee_with_dependents_still_prices_employee_only() {
        let options = SelectedOptions {
            family_members_to_cover: vec![Role::Employee, Role::Spouse],
            ..Default::default()
        };
        let price =
            calculate_ltd_price(&flat_costs(), &create_employee(89000.0, None), &options).unwrap();
        assert_eq!(price, 32.04);
    }

    #[test]
    fn test_covered_salary() {
        assert_eq!(
            ltd_covered_salary(&flat_costs(), &create_employee(89000.0, None)),
            53400.0
        );
    }

    #[test]
    fn test_age_banded_rate() {
        let price = calculate_ltd_price(
            &banded_costs(),
            &create_employee(50000.0, Some(42)),
            &employee_options(),
        )
        .unwrap();
        assert_eq!(price, 27.0);
    }

    #[test]
    fn test_age_banded_requires_age() {
        let result = calculate_ltd_price(
            &banded_costs(),
            &create_employee(50000.0, None),
            &employee_options(),
        );
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "age"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_age_outside_bands_is_error() {
        let result = calculate_ltd_price(
            &banded_costs(),
            &create_employee(50000.0, Some(70)),
            &employee_options(),
        );
        match result {
            Err(EngineError::AgeBandNotFound { age }) => assert_eq!(age, 70),
            other => panic!("Expected AgeBandNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_age_banded_not_elected_does_not_need_age() {
        let price = calculate_ltd_price(
            &banded_costs(),
            &create_employee(50000.0, None),
            &SelectedOptions::default(),
        )
        .unwrap();
        assert_eq!(price, 0.0);
    }

    #[test]
    fn test_price_for_rate_matches_calculated_price() {
        let employee = create_employee(50000.0, Some(42));
        let rate = lookup_ltd_rate(&banded_costs().rate, &employee).unwrap();

        assert_eq!(
            ltd_price_for_rate(&banded_costs(), &employee, rate),
            calculate_ltd_price(&banded_costs(), &employee, &employee_options()).unwrap()
        );
    }

    #[test]
    fn test_lookup_flat_rate_ignores_age() {
        let rate = lookup_ltd_rate(&flat_costs().rate, &create_employee(1.0, Some(99))).unwrap();
        assert_eq!(
            rate,
            LtdRateLookup {
                price: 0.6,
                cost_divisor: 1000.0
            }
        );
    }
}
