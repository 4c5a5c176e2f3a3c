//! Product pricing orchestration.
//!
//! Dispatches a product to its calculator, subtracts the employer
//! contribution and formats the result. [`calculate_product_price`] returns
//! only the employee price; [`price_product`] returns the same figure with
//! the intermediate amounts and an audit trace.

use rust_decimal::Decimal;
use tracing::info;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ContributionMode, Employee, PricingRequest,
    PricingResult, Product, ProductPlan, Role, SelectedOptions,
};

use super::commuter::calculate_commuter_price;
use super::contribution::{get_employer_contribution, is_contribution_capped};
use super::ltd::{calculate_ltd_price, ltd_covered_salary, ltd_price_for_rate, lookup_ltd_rate};
use super::rounding::format_price;
use super::vol_life::{calculate_vol_life_price, calculate_vol_life_price_per_role};

/// Calculates a product's price before employer contribution.
pub fn calculate_pre_contribution_price(
    product: &Product,
    employee: &Employee,
    options: &SelectedOptions,
) -> EngineResult<f64> {
    match &product.plan {
        ProductPlan::VolLife(costs) => calculate_vol_life_price(costs, options),
        ProductPlan::Ltd(costs) => calculate_ltd_price(costs, employee, options),
        ProductPlan::Commuter(costs) => calculate_commuter_price(costs, options),
    }
}

/// Calculates what an employee pays for a product.
///
/// The pre-contribution price is reduced by the employer contribution and
/// formatted to two decimal places.
///
/// # Examples
///
/// ```
/// use benefits_pricing::calculation::calculate_product_price;
/// use benefits_pricing::models::{Employee, Product, SelectedOptions};
/// use rust_decimal::Decimal;
///
/// let product = Product::from_value(serde_json::json!({
///     "id": "commuter",
///     "type": "commuter",
///     "costs": [{ "benefit": "train", "price": 84.75 }],
///     "employer_contribution": { "mode": "dollars", "amount": 25 }
/// }))?;
/// let employee = Employee { id: "emp_001".to_string(), name: String::new(), salary: 0.0, age: None };
/// let options: SelectedOptions = serde_json::from_str(r#"{ "benefit": "train" }"#).unwrap();
///
/// let price = calculate_product_price(&product, &employee, &options)?;
/// assert_eq!(price, Decimal::new(5975, 2));
/// # Ok::<(), benefits_pricing::error::EngineError>(())
/// ```
pub fn calculate_product_price(
    product: &Product,
    employee: &Employee,
    options: &SelectedOptions,
) -> EngineResult<Decimal> {
    let price = calculate_pre_contribution_price(product, employee, options)?;
    let contribution = get_employer_contribution(&product.employer_contribution, price);
    let employee_price = format_price(price - contribution);

    info!(
        product_id = %product.id,
        product_type = %product.product_type(),
        employee_id = %employee.id,
        price,
        contribution,
        employee_price = %employee_price,
        "Calculated product price"
    );

    Ok(employee_price)
}

/// Prices a product and records how the price was reached.
///
/// The `employee_price` is always equal to what [`calculate_product_price`]
/// returns for the same inputs.
pub fn price_product(
    product: &Product,
    employee: &Employee,
    options: &SelectedOptions,
) -> EngineResult<PricingResult> {
    let mut trace = AuditTrace::default();

    let price = match &product.plan {
        ProductPlan::VolLife(costs) => {
            let mut price = 0.0;
            for &role in &options.family_members_to_cover {
                let role_price =
                    calculate_vol_life_price_per_role(role, &options.coverage_level, costs)?;
                let step_number = next_step(&trace);
                trace.steps.push(AuditStep {
                    step_number,
                    rule_id: "vol_life_role_price".to_string(),
                    rule_name: "Voluntary Life Role Price".to_string(),
                    input: serde_json::json!({
                        "role": role,
                        "coverage": options.coverage_for(role),
                    }),
                    output: serde_json::json!({ "price": role_price }),
                    reasoning: format!("Role '{}' priced at ${}", role, role_price),
                });
                price += role_price;
            }

            let step_number = next_step(&trace);
            trace.steps.push(AuditStep {
                step_number,
                rule_id: "vol_life_price".to_string(),
                rule_name: "Voluntary Life Price".to_string(),
                input: serde_json::json!({ "roles": options.family_members_to_cover }),
                output: serde_json::json!({ "price": price }),
                reasoning: format!(
                    "Sum of {} covered role price(s) = ${}",
                    options.family_members_to_cover.len(),
                    price
                ),
            });
            price
        }
        ProductPlan::Ltd(costs) => {
            let (price, reasoning) = if options.covers(Role::Employee) {
                let rate = lookup_ltd_rate(&costs.rate, employee)?;
                let price = ltd_price_for_rate(costs, employee, rate);
                let reasoning = format!(
                    "${} covered salary / {} x {} = ${}",
                    ltd_covered_salary(costs, employee),
                    rate.cost_divisor,
                    rate.price,
                    price
                );
                (price, reasoning)
            } else {
                (
                    0.0,
                    "LTD covers the employee only and 'ee' was not elected".to_string(),
                )
            };

            let step_number = next_step(&trace);
            trace.steps.push(AuditStep {
                step_number,
                rule_id: "ltd_price".to_string(),
                rule_name: "Long-Term Disability Price".to_string(),
                input: serde_json::json!({
                    "salary": employee.salary,
                    "age": employee.age,
                    "coverage_percentage": costs.coverage_percentage,
                    "roles": options.family_members_to_cover,
                }),
                output: serde_json::json!({ "price": price }),
                reasoning,
            });
            price
        }
        ProductPlan::Commuter(costs) => {
            let price = calculate_commuter_price(costs, options)?;
            let step_number = next_step(&trace);
            trace.steps.push(AuditStep {
                step_number,
                rule_id: "commuter_price".to_string(),
                rule_name: "Commuter Benefit Price".to_string(),
                input: serde_json::json!({ "benefit": options.benefit }),
                output: serde_json::json!({ "price": price }),
                reasoning: format!("Flat price for the elected benefit: ${}", price),
            });
            price
        }
    };

    let mode = &product.employer_contribution;
    let contribution = get_employer_contribution(mode, price);
    if is_contribution_capped(mode, price) {
        trace.warnings.push(AuditWarning {
            code: "contribution_capped".to_string(),
            message: format!(
                "Employer contribution exceeds the price ${}; capped at the price",
                price
            ),
            severity: "low".to_string(),
        });
    }

    let step_number = next_step(&trace);
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "employer_contribution".to_string(),
        rule_name: "Employer Contribution".to_string(),
        input: serde_json::json!({ "price": price, "contribution_mode": mode }),
        output: serde_json::json!({ "contribution": contribution }),
        reasoning: match mode {
            ContributionMode::Dollars(amount) => {
                format!("Flat employer contribution of ${} applied as ${}", amount, contribution)
            }
            ContributionMode::Percentage(amount) => {
                format!("${} x {}% = ${}", price, amount, contribution)
            }
        },
    });

    let employee_price = format_price(price - contribution);
    let step_number = next_step(&trace);
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "format_price".to_string(),
        rule_name: "Employee Price".to_string(),
        input: serde_json::json!({ "price": price, "contribution": contribution }),
        output: serde_json::json!({ "employee_price": employee_price.to_string() }),
        reasoning: format!(
            "${} - ${} = ${} to the cent",
            price, contribution, employee_price
        ),
    });

    info!(
        product_id = %product.id,
        employee_id = %employee.id,
        employee_price = %employee_price,
        steps = trace.steps.len(),
        "Priced product"
    );

    Ok(PricingResult {
        product_id: product.id.clone(),
        product_type: product.product_type(),
        employee_id: employee.id.clone(),
        pre_contribution_price: price,
        employer_contribution: contribution,
        employee_price,
        audit_trace: trace,
    })
}

/// Resolves the raw product carried by a request and prices it.
pub fn price_request(request: &PricingRequest) -> EngineResult<PricingResult> {
    let product = request.product()?;
    price_product(&product, &request.employee, &request.selected_options)
}

fn next_step(trace: &AuditTrace) -> u32 {
    trace.steps.len() as u32 + 1
}
