//! Salary Models

use serde::{Deserialize, Serialize};

/// Net-salary breakdown for one employee
///
/// `tds` is the tax deducted at source: `gross_salary * rate`, where the
/// rate is keyed by the employee's country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    pub employee_id: String,
    pub gross_salary: f64,
    pub net_salary: f64,
    pub tds: f64,
    /// Echoed from the employee record, not re-validated
    pub country: String,
}

/// Aggregate over one group of employees (by country or job title)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryMetric {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}
