//! Pricing result models.
//!
//! This module contains the [`PricingResult`] type, which captures the price
//! an employee pays for a product together with the figures it was derived
//! from and an audit trace of each pricing rule applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductType;

/// A single step in the audit trace recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during pricing.
///
/// Warnings flag conditions that don't prevent pricing but may need a look,
/// such as an employer contribution larger than the price it subsidises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a pricing calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during pricing.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of pricing one product for one employee.
///
/// # Example
///
/// ```
/// use benefits_pricing::models::{AuditTrace, PricingResult, ProductType};
/// use rust_decimal::Decimal;
///
/// let result = PricingResult {
///     product_id: "voluntary_life".to_string(),
///     product_type: ProductType::VolLife,
///     employee_id: "emp_001".to_string(),
///     pre_contribution_price: 43.75,
///     employer_contribution: 4.375,
///     employee_price: Decimal::new(3937, 2),
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.employee_price.to_string(), "39.37");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// The id of the product priced.
    pub product_id: String,
    /// The type of the product priced.
    pub product_type: ProductType,
    /// The id of the employee the price is for.
    pub employee_id: String,
    /// The full premium before any employer subsidy.
    pub pre_contribution_price: f64,
    /// The amount the employer pays.
    pub employer_contribution: f64,
    /// What the employee pays, rounded to cents.
    pub employee_price: Decimal,
    /// Audit trace of the pricing rules applied.
    pub audit_trace: AuditTrace,
}
