//! Employee model.

use serde::{Deserialize, Serialize};

/// Represents an employee enrolling in benefits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's name.
    #[serde(default)]
    pub name: String,
    /// Annual base salary, used to size LTD coverage.
    pub salary: f64,
    /// Age in years, used by age-banded rate tables.
    #[serde(default)]
    pub age: Option<u32>,
}
