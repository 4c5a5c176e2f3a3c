//! The options an employee selected for a product.

use serde::{Deserialize, Serialize};

use super::{CommuterBenefit, Role};

/// The coverage amount selected for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageLevel {
    /// The role covered.
    pub role: Role,
    /// The coverage amount in dollars.
    pub coverage: f64,
}

/// An employee's elections for a single product.
///
/// Which fields matter depends on the product: life and disability products
/// read the covered roles (and life reads coverage levels); commuter products
/// read the benefit. Every field defaults to empty; camelCase field names
/// are accepted and unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectedOptions {
    /// The roles to cover, in election order.
    #[serde(default, alias = "familyMembersToCover")]
    pub family_members_to_cover: Vec<Role>,
    /// The coverage amount chosen for each role.
    #[serde(default, alias = "coverageLevel")]
    pub coverage_level: Vec<CoverageLevel>,
    /// The commuter benefit chosen.
    #[serde(default, alias = "Benefit")]
    pub benefit: Option<CommuterBenefit>,
}

impl SelectedOptions {
    /// Returns true if the given role is among the covered family members.
    pub fn covers(&self, role: Role) -> bool {
        self.family_members_to_cover.contains(&role)
    }

    /// Returns the coverage amount selected for a role, if any.
    pub fn coverage_for(&self, role: Role) -> Option<f64> {
        self.coverage_level
            .iter()
            .find(|level| level.role == role)
            .map(|level| level.coverage)
    }
}
