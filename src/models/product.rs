//! Product definitions and their cost tables.
//!
//! Products arrive as loosely-shaped reference data (`type`, `costs`,
//! `employer_contribution`). The `type` code is resolved first and then
//! selects how the cost table is read, so every [`Product`] the engine sees
//! carries a cost table that matches its type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kinds of benefit product the engine can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    /// Voluntary life insurance, priced per covered family member.
    VolLife,
    /// Long-term disability, an employee-only benefit priced from salary.
    Ltd,
    /// Pre-tax commuter benefit with flat prices per benefit.
    Commuter,
}

impl ProductType {
    /// Returns the wire code for this product type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::VolLife => "volLife",
            ProductType::Ltd => "ltd",
            ProductType::Commuter => "commuter",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = EngineError;

    /// Parses a product type code.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_pricing::models::ProductType;
    ///
    /// assert_eq!("ltd".parse::<ProductType>().unwrap(), ProductType::Ltd);
    ///
    /// let err = "vision".parse::<ProductType>().unwrap_err();
    /// assert_eq!(err.to_string(), "Unknown product type: vision");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "volLife" => Ok(ProductType::VolLife),
            "ltd" => Ok(ProductType::Ltd),
            "commuter" => Ok(ProductType::Commuter),
            other => Err(EngineError::UnknownProductType {
                product_type: other.to_string(),
            }),
        }
    }
}

/// A family-member category for coverage purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The employee.
    #[serde(rename = "ee")]
    Employee,
    /// The employee's spouse or partner.
    #[serde(rename = "sp")]
    Spouse,
    /// A dependent child.
    #[serde(rename = "ch")]
    Child,
}

impl Role {
    /// Returns the role code used in cost tables and selections.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Employee => "ee",
            Role::Spouse => "sp",
            Role::Child => "ch",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A commuter benefit an employee can elect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuterBenefit {
    /// Transit pass.
    Train,
    /// Workplace parking.
    Parking,
}

impl fmt::Display for CommuterBenefit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommuterBenefit::Train => f.write_str("train"),
            CommuterBenefit::Parking => f.write_str("parking"),
        }
    }
}

/// How the employer subsidises a product.
///
/// Serialized with the mode as a tag and the amount alongside it:
///
/// ```
/// use benefits_pricing::models::ContributionMode;
///
/// let mode: ContributionMode =
///     serde_json::from_str(r#"{"mode": "percentage", "amount": 10}"#).unwrap();
/// assert_eq!(mode, ContributionMode::Percentage(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "amount", rename_all = "lowercase")]
pub enum ContributionMode {
    /// A flat dollar amount per pay period.
    Dollars(f64),
    /// A percentage (0-100) of the pre-contribution price.
    Percentage(f64),
}

impl Default for ContributionMode {
    fn default() -> Self {
        ContributionMode::Dollars(0.0)
    }
}

/// Price of one role's coverage, per `cost_divisor` dollars of coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCost {
    /// The role this price applies to.
    pub role: Role,
    /// The price per coverage unit.
    pub price: f64,
    /// The number of coverage dollars in one unit (e.g. 1000).
    pub cost_divisor: f64,
}

/// An age band within an age-banded LTD rate table. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    /// Youngest age in the band.
    pub min_age: u32,
    /// Oldest age in the band.
    pub max_age: u32,
    /// The price per coverage unit for this band.
    pub price: f64,
}

impl AgeBand {
    /// Returns true if the band covers the given age.
    pub fn contains(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// The rate applied to LTD coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum LtdRate {
    /// A single rate for every employee.
    Flat {
        /// The price per coverage unit.
        price: f64,
        /// The number of coverage dollars in one unit.
        cost_divisor: f64,
    },
    /// Rates selected by the employee's age.
    AgeBanded {
        /// The number of coverage dollars in one unit.
        cost_divisor: f64,
        /// The bands, checked in order.
        bands: Vec<AgeBand>,
    },
}

/// Cost table for a long-term disability product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtdCosts {
    /// Percentage of salary covered by the benefit.
    pub coverage_percentage: f64,
    /// The rate applied to the covered salary.
    pub rate: LtdRate,
}

/// Flat price of one commuter benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuterCost {
    /// The benefit priced.
    pub benefit: CommuterBenefit,
    /// The price per pay period.
    pub price: f64,
}

/// A product's cost table, one variant per product type.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductPlan {
    /// Voluntary life costs keyed by role.
    VolLife(Vec<RoleCost>),
    /// Long-term disability costs.
    Ltd(LtdCosts),
    /// Commuter costs keyed by benefit.
    Commuter(Vec<CommuterCost>),
}

impl ProductPlan {
    /// Returns the product type this plan prices.
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductPlan::VolLife(_) => ProductType::VolLife,
            ProductPlan::Ltd(_) => ProductType::Ltd,
            ProductPlan::Commuter(_) => ProductType::Commuter,
        }
    }
}

/// A benefit product as supplied by the caller, before its type is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProduct {
    /// Catalog identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The product type code (e.g. "volLife").
    #[serde(rename = "type")]
    pub product_type: String,
    /// The cost table, shaped according to the product type.
    #[serde(default)]
    pub costs: serde_json::Value,
    /// The employer's contribution towards the price.
    #[serde(default, alias = "employerContribution")]
    pub employer_contribution: ContributionMode,
}

/// A fully resolved benefit product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    /// Catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The cost table.
    pub plan: ProductPlan,
    /// The employer's contribution towards the price.
    pub employer_contribution: ContributionMode,
}

impl Product {
    /// Returns the product type.
    pub fn product_type(&self) -> ProductType {
        self.plan.product_type()
    }

    /// Resolves a product from loosely-shaped JSON.
    ///
    /// The type code is checked before the cost table, so an unknown type is
    /// always reported as [`EngineError::UnknownProductType`].
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_pricing::models::Product;
    ///
    /// let err = Product::from_value(serde_json::json!({ "type": "vision" })).unwrap_err();
    /// assert_eq!(err.to_string(), "Unknown product type: vision");
    /// ```
    pub fn from_value(value: serde_json::Value) -> EngineResult<Self> {
        let raw: RawProduct =
            serde_json::from_value(value).map_err(|e| EngineError::InvalidProduct {
                product_type: String::new(),
                message: e.to_string(),
            })?;
        Product::try_from(raw)
    }
}

impl TryFrom<RawProduct> for Product {
    type Error = EngineError;

    fn try_from(raw: RawProduct) -> EngineResult<Self> {
        let product_type: ProductType = raw.product_type.parse()?;

        let invalid = |e: serde_json::Error| EngineError::InvalidProduct {
            product_type: product_type.to_string(),
            message: e.to_string(),
        };

        let plan = match product_type {
            ProductType::VolLife => {
                ProductPlan::VolLife(serde_json::from_value(raw.costs).map_err(invalid)?)
            }
            ProductType::Ltd => ProductPlan::Ltd(serde_json::from_value(raw.costs).map_err(invalid)?),
            ProductType::Commuter => {
                ProductPlan::Commuter(serde_json::from_value(raw.costs).map_err(invalid)?)
            }
        };

        Ok(Product {
            id: raw.id,
            name: raw.name,
            plan,
            employer_contribution: raw.employer_contribution,
        })
    }
}
