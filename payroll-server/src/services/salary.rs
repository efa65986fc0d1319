//! Salary Service
//!
//! Country-keyed TDS (tax deducted at source) policy and grouped salary
//! metrics. The policy table is static configuration: built once at
//! startup, injected into the service, read-only afterwards.

use std::collections::{BTreeMap, HashMap};

use shared::models::{SalaryBreakdown, SalaryMetric};
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, employee as repo};

/// TDS rate table: country code -> deduction rate in [0, 1)
///
/// Countries without an explicit entry fall back to the default rate.
#[derive(Debug, Clone)]
pub struct TaxPolicy {
    rates: HashMap<String, f64>,
    default_rate: f64,
}

impl TaxPolicy {
    pub fn new(rates: HashMap<String, f64>, default_rate: f64) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    /// Built-in baseline: 10% for India, 15% for the US, 5% elsewhere
    pub fn builtin() -> Self {
        let rates = HashMap::from([("IN".to_string(), 0.10), ("US".to_string(), 0.15)]);
        Self::new(rates, 0.05)
    }

    pub fn rate_for(&self, country: &str) -> f64 {
        self.rates.get(country).copied().unwrap_or(self.default_rate)
    }
}

#[derive(Clone)]
pub struct SalaryService {
    pool: SqlitePool,
    policy: TaxPolicy,
}

impl SalaryService {
    pub fn new(pool: SqlitePool, policy: TaxPolicy) -> Self {
        Self { pool, policy }
    }

    /// Net salary after TDS for one employee; `None` when the id is unknown
    ///
    /// Plain f64 arithmetic, no rounding: the country is echoed from the
    /// stored record, not re-validated.
    pub async fn calculate_net_salary(
        &self,
        employee_id: &str,
    ) -> RepoResult<Option<SalaryBreakdown>> {
        let Some(employee) = repo::find_by_id(&self.pool, employee_id).await? else {
            return Ok(None);
        };

        let rate = self.policy.rate_for(&employee.country);
        let tds = employee.salary * rate;

        Ok(Some(SalaryBreakdown {
            employee_id: employee.id,
            gross_salary: employee.salary,
            net_salary: employee.salary - tds,
            tds,
            country: employee.country,
        }))
    }

    /// {min, max, average} per distinct country currently stored
    pub async fn metrics_by_country(&self) -> RepoResult<BTreeMap<String, SalaryMetric>> {
        repo::aggregate_by_country(&self.pool).await
    }

    /// {min, max, average} per distinct job title currently stored
    pub async fn metrics_by_job_title(&self) -> RepoResult<BTreeMap<String, SalaryMetric>> {
        repo::aggregate_by_job_title(&self.pool).await
    }
}
